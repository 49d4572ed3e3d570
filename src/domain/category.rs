use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, ValidationError};

/// A catalog category.
///
/// Two categories are the same category when their identifiers match; the
/// remaining fields do not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: String,
    pub is_active: bool,
}

impl Category {
    /// Create an active category with a fresh identifier and no description.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, ValidationError> {
        Ok(Self {
            id: CategoryId::new(),
            name: CategoryName::new(name)?,
            description: String::new(),
            is_active: true,
        })
    }

    /// Use the given identifier instead of a generated one.
    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Replace name and description.
    ///
    /// The name is validated before anything is assigned, so a rejected
    /// update leaves the category untouched. The description is free-form.
    pub fn update_category<S, D>(&mut self, name: S, description: D) -> Result<(), ValidationError>
    where
        S: Into<String>,
        D: Into<String>,
    {
        self.name = CategoryName::new(name)?;
        self.description = description.into();
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} (Active: {})",
            self.name, self.description, self.is_active
        )
    }
}

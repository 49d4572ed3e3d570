use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryId, CategoryName, ValidationError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset applied when a category is updated.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct CategoryChanges {
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Category> for DomainCategory {
    type Error = ValidationError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::parse_str(&category.id)?,
            name: CategoryName::new(category.name)?,
            description: category.description,
            is_active: category.is_active,
        })
    }
}

impl NewCategory {
    pub fn from_domain(category: &DomainCategory, now: NaiveDateTime) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.as_str().to_string(),
            description: category.description.clone(),
            is_active: category.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl CategoryChanges {
    pub fn from_domain(category: &DomainCategory, now: NaiveDateTime) -> Self {
        Self {
            name: category.name.as_str().to_string(),
            description: category.description.clone(),
            is_active: category.is_active,
            updated_at: now,
        }
    }
}

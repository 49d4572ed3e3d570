use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::CategoryId;

fn default_active() -> bool {
    true
}

/// Input for creating a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CreateCategoryRequest {
    /// Request for an active category without description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryResponse {
    pub id: CategoryId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCategoryRequest {
    pub id: CategoryId,
}

/// Partial update of a category.
///
/// `None` leaves the corresponding field untouched; `Some(String::new())`
/// for the description clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub id: CategoryId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateCategoryRequest {
    /// Request that changes nothing yet.
    pub fn new(id: CategoryId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            is_active: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCategoryRequest {
    pub id: CategoryId,
}

/// Category as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            name: value.name.into_inner(),
            description: value.description,
            is_active: value.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListCategoryResponse {
    pub data: Vec<CategoryDto>,
}

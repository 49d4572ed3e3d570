use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::genre::Genre;
use crate::domain::types::{CategoryId, GenreId};

fn default_active() -> bool {
    true
}

/// Input for creating a genre linked to existing categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGenreRequest {
    pub name: String,
    #[serde(default)]
    pub category_ids: BTreeSet<CategoryId>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CreateGenreRequest {
    /// Request for an active genre without categories.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category_ids: BTreeSet::new(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGenreResponse {
    pub id: GenreId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetGenreRequest {
    pub id: GenreId,
}

/// Partial update of a genre.
///
/// `category_ids: Some(set)` replaces the whole category set, including with
/// an empty one; `None` keeps the current categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGenreRequest {
    pub id: GenreId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub category_ids: Option<BTreeSet<CategoryId>>,
}

impl UpdateGenreRequest {
    pub fn new(id: GenreId) -> Self {
        Self {
            id,
            name: None,
            is_active: None,
            category_ids: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteGenreRequest {
    pub id: GenreId,
}

/// Genre as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreDto {
    pub id: GenreId,
    pub name: String,
    pub is_active: bool,
    pub categories: BTreeSet<CategoryId>,
}

impl From<Genre> for GenreDto {
    fn from(value: Genre) -> Self {
        Self {
            id: value.id,
            name: value.name.into_inner(),
            is_active: value.is_active,
            categories: value.categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListGenreResponse {
    pub data: Vec<GenreDto>,
}

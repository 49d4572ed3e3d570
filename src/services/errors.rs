use std::collections::BTreeSet;

use thiserror::Error;

use crate::domain::types::{CategoryId, GenreId, ValidationError};

fn join_ids(ids: &BTreeSet<CategoryId>) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error type shared by the category and genre services.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Category fields were rejected by the entity.
    #[error("invalid category data: {0}")]
    InvalidCategoryData(#[source] ValidationError),
    /// No category is stored under the requested id.
    #[error("category with id {0} not found")]
    CategoryNotFound(CategoryId),
    /// Genre fields were rejected by the entity.
    #[error("invalid genre: {0}")]
    InvalidGenre(#[source] ValidationError),
    /// No genre is stored under the requested id.
    #[error("genre with id {0} not found")]
    GenreNotFound(GenreId),
    /// A genre referenced categories that do not exist.
    #[error("categories not found: {}", join_ids(.0))]
    RelatedCategoriesNotFound(BTreeSet<CategoryId>),
    /// The storage layer failed; details are logged where it happened.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository error types, so the
//! conversions live here instead.

use crate::domain::types::ValidationError;
use crate::repository::RepositoryError;

impl From<ValidationError> for RepositoryError {
    fn from(val: ValidationError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

//! Use cases over the catalog.
//!
//! Every service is a plain function generic over the repository traits it
//! needs, so callers inject whichever storage they use.

pub mod categories;
pub mod errors;
pub mod genres;

pub use errors::{ServiceError, ServiceResult};

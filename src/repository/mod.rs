//! Storage contracts for catalog entities and their implementations.
//!
//! Reads and writes are split into separate traits so services can ask for
//! exactly the capabilities they use. Misses are never errors at this layer:
//! lookups return `None`, and `update`/`delete` of an unknown id do nothing.

use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::genre::Genre;
use crate::domain::types::{CategoryId, GenreId};

pub mod category;
pub mod errors;
pub mod genre;
pub mod memory;

pub use errors::{RepositoryError, RepositoryResult};
pub use memory::{InMemoryCategoryRepository, InMemoryGenreRepository};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// List every stored category.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category.
    fn save_category(&self, category: &Category) -> RepositoryResult<()>;
    /// Replace the stored category with the same id, if there is one.
    fn update_category(&self, category: &Category) -> RepositoryResult<()>;
    /// Remove a category by id, if present.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<()>;
}

/// Read-only operations for genre entities.
pub trait GenreReader {
    /// Retrieve a genre, with its category ids, by identifier.
    fn get_genre_by_id(&self, id: GenreId) -> RepositoryResult<Option<Genre>>;
    /// List every stored genre.
    fn list_genres(&self) -> RepositoryResult<Vec<Genre>>;
}

/// Write operations for genre entities.
pub trait GenreWriter {
    /// Persist a new genre together with its category references.
    fn save_genre(&self, genre: &Genre) -> RepositoryResult<()>;
    /// Replace the stored genre with the same id, if there is one.
    fn update_genre(&self, genre: &Genre) -> RepositoryResult<()>;
    /// Remove a genre by id, if present.
    fn delete_genre(&self, id: GenreId) -> RepositoryResult<()>;
}

/// Full category storage contract.
pub trait CategoryRepository: CategoryReader + CategoryWriter {}

impl<T: CategoryReader + CategoryWriter> CategoryRepository for T {}

/// Full genre storage contract.
pub trait GenreRepository: GenreReader + GenreWriter {}

impl<T: GenreReader + GenreWriter> GenreRepository for T {}

use std::cell::RefCell;

use crate::domain::category::Category;
use crate::domain::genre::Genre;
use crate::domain::types::{CategoryId, GenreId};
use crate::repository::{
    CategoryReader, CategoryWriter, GenreReader, GenreWriter, RepositoryResult,
};

/// In-memory category store keeping insertion order.
///
/// Interior mutability goes through a `RefCell`, so the repository can be
/// shared by reference within one thread but is not `Sync`.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: RefCell<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing categories.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: RefCell::new(categories),
        }
    }

    pub fn len(&self) -> usize {
        self.categories.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.borrow().is_empty()
    }
}

impl CategoryReader for InMemoryCategoryRepository {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        Ok(self
            .categories
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }
}

impl CategoryWriter for InMemoryCategoryRepository {
    fn save_category(&self, category: &Category) -> RepositoryResult<()> {
        self.categories.borrow_mut().push(category.clone());
        Ok(())
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<()> {
        if let Some(stored) = self
            .categories
            .borrow_mut()
            .iter_mut()
            .find(|c| c.id == category.id)
        {
            *stored = category.clone();
        }
        Ok(())
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<()> {
        self.categories.borrow_mut().retain(|c| c.id != id);
        Ok(())
    }
}

/// In-memory genre store keeping insertion order.
#[derive(Debug, Default)]
pub struct InMemoryGenreRepository {
    genres: RefCell<Vec<Genre>>,
}

impl InMemoryGenreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing genres.
    pub fn with_genres(genres: Vec<Genre>) -> Self {
        Self {
            genres: RefCell::new(genres),
        }
    }

    pub fn len(&self) -> usize {
        self.genres.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.borrow().is_empty()
    }
}

impl GenreReader for InMemoryGenreRepository {
    fn get_genre_by_id(&self, id: GenreId) -> RepositoryResult<Option<Genre>> {
        Ok(self.genres.borrow().iter().find(|g| g.id == id).cloned())
    }

    fn list_genres(&self) -> RepositoryResult<Vec<Genre>> {
        Ok(self.genres.borrow().clone())
    }
}

impl GenreWriter for InMemoryGenreRepository {
    fn save_genre(&self, genre: &Genre) -> RepositoryResult<()> {
        self.genres.borrow_mut().push(genre.clone());
        Ok(())
    }

    fn update_genre(&self, genre: &Genre) -> RepositoryResult<()> {
        if let Some(stored) = self
            .genres
            .borrow_mut()
            .iter_mut()
            .find(|g| g.id == genre.id)
        {
            *stored = genre.clone();
        }
        Ok(())
    }

    fn delete_genre(&self, id: GenreId) -> RepositoryResult<()> {
        self.genres.borrow_mut().retain(|g| g.id != id);
        Ok(())
    }
}

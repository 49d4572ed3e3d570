use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, GenreId, GenreName, ValidationError};

/// A catalog genre referencing categories by identifier.
///
/// The entity does not know whether the referenced categories exist; that is
/// checked by the genre services against a category repository. Equality is
/// identity based.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: GenreName,
    pub is_active: bool,
    pub categories: BTreeSet<CategoryId>,
}

impl Genre {
    /// Create an active genre with a fresh identifier and no categories.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, ValidationError> {
        Ok(Self {
            id: GenreId::new(),
            name: GenreName::new(name)?,
            is_active: true,
            categories: BTreeSet::new(),
        })
    }

    pub fn with_id(mut self, id: GenreId) -> Self {
        self.id = id;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Rename the genre, leaving it untouched if the name is rejected.
    pub fn change_name<S: Into<String>>(&mut self, name: S) -> Result<(), ValidationError> {
        self.name = GenreName::new(name)?;
        Ok(())
    }

    pub fn add_category(&mut self, category_id: CategoryId) {
        self.categories.insert(category_id);
    }

    /// Removing a category that is not referenced is a no-op.
    pub fn remove_category(&mut self, category_id: CategoryId) {
        self.categories.remove(&category_id);
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Genre {}

impl Hash for Genre {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Active: {})", self.name, self.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_with_defaults() {
        let genre = Genre::new("Romance").unwrap();
        assert_eq!(genre.name, "Romance");
        assert!(genre.is_active);
        assert!(genre.categories.is_empty());
    }

    #[test]
    fn created_with_provided_values() {
        let id = GenreId::new();
        let categories = [CategoryId::new(), CategoryId::new()];
        let genre = Genre::new("Romance")
            .unwrap()
            .with_id(id)
            .with_active(false)
            .with_categories(categories);

        assert_eq!(genre.id, id);
        assert!(!genre.is_active);
        assert_eq!(genre.categories, BTreeSet::from(categories));
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert_eq!(
            Genre::new("").unwrap_err(),
            ValidationError::EmptyString("name")
        );
        assert!(Genre::new("a".repeat(256)).is_err());
    }

    #[test]
    fn display_shows_name_and_status() {
        let genre = Genre::new("Romance").unwrap();
        assert_eq!(genre.to_string(), "Romance (Active: true)");
    }

    #[test]
    fn change_name_validates() {
        let mut genre = Genre::new("Romance").unwrap();
        genre.change_name("Drama").unwrap();
        assert_eq!(genre.name, "Drama");

        assert!(genre.change_name("").is_err());
        assert!(genre.change_name("a".repeat(256)).is_err());
        assert_eq!(genre.name, "Drama");
    }

    #[test]
    fn adding_a_category_twice_keeps_one_entry() {
        let category_id = CategoryId::new();
        let mut genre = Genre::new("Romance").unwrap();
        genre.add_category(category_id);
        genre.add_category(category_id);

        assert_eq!(genre.categories, BTreeSet::from([category_id]));
    }

    #[test]
    fn removes_categories() {
        let kept = CategoryId::new();
        let removed = CategoryId::new();
        let mut genre = Genre::new("Romance")
            .unwrap()
            .with_categories([kept, removed]);

        genre.remove_category(removed);
        assert_eq!(genre.categories, BTreeSet::from([kept]));
    }

    #[test]
    fn removing_an_absent_category_is_a_no_op() {
        let existing = CategoryId::new();
        let mut genre = Genre::new("Romance").unwrap().with_categories([existing]);

        genre.remove_category(CategoryId::new());
        assert_eq!(genre.categories, BTreeSet::from([existing]));
    }

    #[test]
    fn activation_is_idempotent() {
        let mut genre = Genre::new("Romance").unwrap();
        genre.deactivate();
        genre.deactivate();
        assert!(!genre.is_active);

        genre.activate();
        genre.activate();
        assert!(genre.is_active);
    }

    #[test]
    fn equality_uses_only_the_id() {
        let id = GenreId::new();
        let romance = Genre::new("Romance").unwrap().with_id(id);
        let drama = Genre::new("Drama")
            .unwrap()
            .with_id(id)
            .with_categories([CategoryId::new()]);

        assert_eq!(romance, drama);
        assert_ne!(romance, Genre::new("Romance").unwrap());
    }
}

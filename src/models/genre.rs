use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::genre::Genre as DomainGenre;
use crate::domain::types::{CategoryId, GenreId, GenreName, ValidationError};

/// Diesel model representing the `genres` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::genres)]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Genre`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::genres)]
pub struct NewGenre {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset applied when a genre is updated.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::genres)]
pub struct GenreChanges {
    pub name: String,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

/// Row of the `genre_categories` join table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::genre_categories)]
pub struct GenreCategory {
    pub genre_id: String,
    pub category_id: String,
}

impl Genre {
    /// Build the domain genre from this row and the category ids linked to it.
    pub fn into_domain<'a, I>(self, category_ids: I) -> Result<DomainGenre, ValidationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let categories = category_ids
            .into_iter()
            .map(CategoryId::parse_str)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(DomainGenre {
            id: GenreId::parse_str(&self.id)?,
            name: GenreName::new(self.name)?,
            is_active: self.is_active,
            categories,
        })
    }
}

impl NewGenre {
    pub fn from_domain(genre: &DomainGenre, now: NaiveDateTime) -> Self {
        Self {
            id: genre.id.to_string(),
            name: genre.name.as_str().to_string(),
            is_active: genre.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl GenreChanges {
    pub fn from_domain(genre: &DomainGenre, now: NaiveDateTime) -> Self {
        Self {
            name: genre.name.as_str().to_string(),
            is_active: genre.is_active,
            updated_at: now,
        }
    }
}

impl GenreCategory {
    /// Join rows for every category referenced by `genre`.
    pub fn links_for(genre: &DomainGenre) -> Vec<Self> {
        let genre_id = genre.id.to_string();
        genre
            .categories
            .iter()
            .map(|category_id| Self {
                genre_id: genre_id.clone(),
                category_id: category_id.to_string(),
            })
            .collect()
    }
}

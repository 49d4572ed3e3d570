use std::collections::HashMap;

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::genre::Genre;
use crate::domain::types::GenreId;
use crate::models::genre::{Genre as DbGenre, GenreCategory, GenreChanges, NewGenre};
use crate::repository::{DieselRepository, GenreReader, GenreWriter, RepositoryResult};

fn insert_links(conn: &mut SqliteConnection, links: &[GenreCategory]) -> QueryResult<usize> {
    use crate::schema::genre_categories;

    if links.is_empty() {
        return Ok(0);
    }
    diesel::insert_into(genre_categories::table)
        .values(links)
        .execute(conn)
}

impl GenreReader for DieselRepository {
    fn get_genre_by_id(&self, id: GenreId) -> RepositoryResult<Option<Genre>> {
        use crate::schema::{genre_categories, genres};

        let mut conn = self.conn()?;

        let Some(genre) = genres::table
            .find(id.to_string())
            .select(DbGenre::as_select())
            .first(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let category_ids = genre_categories::table
            .filter(genre_categories::genre_id.eq(genre.id.as_str()))
            .select(genre_categories::category_id)
            .load::<String>(&mut conn)?;

        let genre = genre.into_domain(category_ids.iter().map(String::as_str))?;
        Ok(Some(genre))
    }

    fn list_genres(&self) -> RepositoryResult<Vec<Genre>> {
        use crate::schema::{genre_categories, genres};

        let mut conn = self.conn()?;

        let rows = genres::table
            .order(genres::created_at.asc())
            .select(DbGenre::as_select())
            .load(&mut conn)?;

        let mut links: HashMap<String, Vec<String>> = HashMap::new();
        for link in genre_categories::table
            .select(GenreCategory::as_select())
            .load(&mut conn)?
        {
            links.entry(link.genre_id).or_default().push(link.category_id);
        }

        let items = rows
            .into_iter()
            .map(|row| {
                let category_ids = links.remove(&row.id).unwrap_or_default();
                row.into_domain(category_ids.iter().map(String::as_str))
            })
            .collect::<Result<Vec<Genre>, _>>()?;

        Ok(items)
    }
}

impl GenreWriter for DieselRepository {
    fn save_genre(&self, genre: &Genre) -> RepositoryResult<()> {
        use crate::schema::genres;

        let mut conn = self.conn()?;
        let db_genre = NewGenre::from_domain(genre, Utc::now().naive_utc());
        let links = GenreCategory::links_for(genre);

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(genres::table)
                .values(&db_genre)
                .execute(conn)?;
            insert_links(conn, &links)
        })?;

        Ok(())
    }

    fn update_genre(&self, genre: &Genre) -> RepositoryResult<()> {
        use crate::schema::{genre_categories, genres};

        let mut conn = self.conn()?;
        let genre_id = genre.id.to_string();
        let changes = GenreChanges::from_domain(genre, Utc::now().naive_utc());
        let links = GenreCategory::links_for(genre);

        let affected = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let affected = diesel::update(genres::table.find(genre_id.as_str()))
                .set(&changes)
                .execute(conn)?;
            if affected == 0 {
                return Ok(0);
            }

            diesel::delete(
                genre_categories::table.filter(genre_categories::genre_id.eq(genre_id.as_str())),
            )
            .execute(conn)?;
            insert_links(conn, &links)?;
            Ok(affected)
        })?;

        if affected == 0 {
            log::debug!("Genre {} not stored, update skipped", genre.id);
        }
        Ok(())
    }

    fn delete_genre(&self, id: GenreId) -> RepositoryResult<()> {
        use crate::schema::{genre_categories, genres};

        let mut conn = self.conn()?;
        let genre_id = id.to_string();

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(
                genre_categories::table.filter(genre_categories::genre_id.eq(genre_id.as_str())),
            )
            .execute(conn)?;
            diesel::delete(genres::table.find(genre_id.as_str())).execute(conn)
        })?;

        Ok(())
    }
}

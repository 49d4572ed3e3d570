use chrono::Utc;
use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::models::category::{
    Category as DbCategory, CategoryChanges, NewCategory as DbNewCategory,
};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.to_string())
            .select(DbCategory::as_select())
            .first(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::created_at.asc())
            .select(DbCategory::as_select())
            .load(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }
}

impl CategoryWriter for DieselRepository {
    fn save_category(&self, category: &Category) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category = DbNewCategory::from_domain(category, Utc::now().naive_utc());

        diesel::insert_into(categories::table)
            .values(&db_category)
            .execute(&mut conn)?;

        Ok(())
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let changes = CategoryChanges::from_domain(category, Utc::now().naive_utc());

        let affected = diesel::update(categories::table.find(category.id.to_string()))
            .set(&changes)
            .execute(&mut conn)?;

        if affected == 0 {
            log::debug!("Category {} not stored, update skipped", category.id);
        }
        Ok(())
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        diesel::delete(categories::table.find(id.to_string())).execute(&mut conn)?;

        Ok(())
    }
}

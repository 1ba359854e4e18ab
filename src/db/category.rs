use color_eyre::Result;

use super::Db;
use crate::models::Category;

impl Db {
    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.fetch_all("SELECT id, type FROM categories ORDER BY id", ())
            .await
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<Category>> {
        self.fetch_optional(
            "SELECT id, type FROM categories WHERE id = ?1",
            libsql::params![id],
        )
        .await
    }
}

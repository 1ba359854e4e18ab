// Database module - provides data access layer

use std::sync::Arc;

use color_eyre::{eyre::OptionExt, Result};
use libsql::params::IntoParams;
use serde::de::DeserializeOwned;

mod category;
mod question;
mod schema;

// Main database handle
#[derive(Clone)]
pub struct Db {
    db: Arc<libsql::Database>,
}

impl Db {
    pub async fn new(url: String, auth_token: String) -> Result<Self> {
        let db = if url.starts_with("file:") {
            // Local SQLite file
            let path = url.strip_prefix("file:").unwrap_or(&url);
            libsql::Builder::new_local(path).build().await?
        } else {
            // Remote Turso database
            libsql::Builder::new_remote(url, auth_token).build().await?
        };

        let conn = db.connect()?;

        // Verify connection
        let one = conn
            .query("SELECT 1", ())
            .await?
            .next()
            .await?
            .ok_or_eyre("connection check failed")?
            .get::<i32>(0)?;
        assert_eq!(one, 1);

        // Initialize schema
        schema::create_schema(&conn).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { db: Arc::new(db) })
    }

    fn conn(&self) -> Result<libsql::Connection> {
        Ok(self.db.connect()?)
    }

    /// Run a query and deserialize every row into `T` via `libsql::de`.
    async fn fetch_all<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<Vec<T>> {
        let mut rows = self.conn()?.query(sql, params).await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(libsql::de::from_row::<T>(&row)?);
        }
        Ok(results)
    }

    /// Run a query and deserialize the first row, or `None` if there is none.
    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<Option<T>> {
        match self.conn()?.query(sql, params).await?.next().await? {
            Some(row) => Ok(Some(libsql::de::from_row::<T>(&row)?)),
            None => Ok(None),
        }
    }
}

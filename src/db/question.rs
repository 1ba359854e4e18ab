use color_eyre::{eyre::OptionExt, Result};

use super::Db;
use crate::models::Question;

impl Db {
    /// All questions in store order (by id), the order every listing
    /// and pagination window is computed over.
    pub async fn questions(&self) -> Result<Vec<Question>> {
        self.fetch_all(
            "SELECT id, question, answer, difficulty, category FROM questions ORDER BY id",
            (),
        )
        .await
    }

    pub async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>> {
        self.fetch_all(
            "SELECT id, question, answer, difficulty, category FROM questions \
             WHERE category = ?1 ORDER BY id",
            libsql::params![category],
        )
        .await
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn()?
            .query("SELECT COUNT(*) FROM questions", ())
            .await?
            .next()
            .await?
            .ok_or_eyre("could not count questions")?
            .get(0)?;

        Ok(count)
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<Question>> {
        self.fetch_optional(
            "SELECT id, question, answer, difficulty, category FROM questions WHERE id = ?1",
            libsql::params![id],
        )
        .await
    }

    /// Insert a question and return its store-assigned id.
    pub async fn create_question(
        &self,
        question: &str,
        answer: &str,
        difficulty: Option<i64>,
        category: Option<i64>,
    ) -> Result<i64> {
        let id: i64 = self
            .conn()?
            .query(
                "INSERT INTO questions (question, answer, difficulty, category) \
                 VALUES (?1, ?2, ?3, ?4) RETURNING id",
                libsql::params![question, answer, difficulty, category],
            )
            .await?
            .next()
            .await?
            .ok_or_eyre("insert returned no id")?
            .get(0)?;

        tracing::info!("new question created with id: {id}");
        Ok(id)
    }

    /// Delete by id. Returns whether a row was actually removed.
    pub async fn delete_question(&self, id: i64) -> Result<bool> {
        let affected = self
            .conn()?
            .execute("DELETE FROM questions WHERE id = ?1", libsql::params![id])
            .await?;

        Ok(affected > 0)
    }
}

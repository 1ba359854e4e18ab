// Database schema initialization

use color_eyre::{eyre::OptionExt, Result};

/// Default category set, inserted once when the categories table is empty.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub async fn create_schema(conn: &libsql::Connection) -> Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
        (),
    )
    .await?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            difficulty INTEGER,
            category INTEGER
        )
        "#,
        (),
    )
    .await?;

    let count = conn
        .query("SELECT COUNT(*) FROM categories", ())
        .await?
        .next()
        .await?
        .ok_or_eyre("could not count categories")?
        .get::<i64>(0)?;

    if count == 0 {
        for label in DEFAULT_CATEGORIES {
            conn.execute(
                "INSERT INTO categories (type) VALUES (?1)",
                libsql::params![label],
            )
            .await?;
        }
        tracing::info!("seeded {} default categories", DEFAULT_CATEGORIES.len());
    }

    Ok(())
}

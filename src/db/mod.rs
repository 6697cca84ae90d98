//! Database access layer
//!
//! SQLite-backed car store. Connection setup and schema init here, queries
//! in `cars`, startup seeding in `seed`.

use std::path::Path;

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{Error, Result};

pub mod cars;
pub mod seed;

/// Open the car database, creating the file if it does not exist yet.
///
/// SQLite will not create intermediate directories, so a missing parent
/// directory is reported up front instead of as an opaque open failure.
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(Error::Config(format!(
                "Database directory not found: {}",
                parent.display()
            )));
        }
    }

    // mode=rwc: read-write, create if missing
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePool::connect(&db_url).await?;

    init_schema(&pool).await?;
    info!("Database schema ready at {}", db_path.display());

    Ok(pool)
}

/// Create the cars table if it does not exist.
///
/// Public so tests can initialize an in-memory pool.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cars (
            id TEXT PRIMARY KEY,
            model TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

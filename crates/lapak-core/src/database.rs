//! SQLite connection pool (embedded, no external dependencies)

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;

/// Open (creating if missing) the SQLite database file at `database_path`.
///
/// The pool runs in WAL mode with `synchronous=NORMAL`: durable across
/// process crashes, fast on writes.
pub async fn open_pool(database_path: &str) -> Result<SqlitePool> {
    tracing::info!("Opening SQLite database at: {}", database_path);

    if let Some(parent) = Path::new(database_path).parent() {
        if !parent.as_os_str().is_empty() {
            tracing::debug!("Creating parent directory: {}", parent.display());
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("SQLite connection established");

    Ok(pool)
}

//! SQLite todo table

use crate::models::Todo;
use lapak_core::database::open_pool;
use lapak_core::Result;
use sqlx::SqlitePool;

pub struct TodoDatabase {
    pool: SqlitePool,
}

impl TodoDatabase {
    pub async fn open(database_path: &str) -> Result<Self> {
        let pool = open_pool(database_path).await?;

        tracing::info!("Creating todo schema if absent...");
        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn load_all(&self) -> Result<Vec<Todo>> {
        let rows: Vec<Todo> = sqlx::query_as("SELECT id, text, completed FROM todos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn insert(&self, text: &str) -> Result<Todo> {
        let id = sqlx::query("INSERT INTO todos (text, completed) VALUES (?1, 0)")
            .bind(text)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Todo {
            id,
            text: text.to_string(),
            completed: false,
        })
    }

    pub async fn set_completed(&self, id: i64, completed: bool) -> Result<u64> {
        let result = sqlx::query("UPDATE todos SET completed = ?1 WHERE id = ?2")
            .bind(completed)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Returns the number of rows removed; an unknown id removes nothing.
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

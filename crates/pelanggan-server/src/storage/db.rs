//! SQLite customer table

use crate::models::{DataTableResponse, Pelanggan};
use crate::query::ListQuery;
use crate::storage::seed::synthetic_customers;
use lapak_core::database::open_pool;
use lapak_core::Result;
use sqlx::SqlitePool;

pub struct CustomerDatabase {
    pool: SqlitePool,
}

impl CustomerDatabase {
    pub async fn open(database_path: &str) -> Result<Self> {
        let pool = open_pool(database_path).await?;

        tracing::info!("Creating customer schema if absent...");
        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pelanggan (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nama TEXT NOT NULL,
                alamat TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_nama ON pelanggan(nama)")
            .execute(pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_alamat ON pelanggan(alamat)")
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Fill an empty table with `count` synthetic customers in a single
    /// transaction. Returns the number of rows written, 0 if the table
    /// already held data.
    pub async fn seed_if_empty(&self, count: usize) -> Result<usize> {
        if self.count_all().await? > 0 {
            return Ok(0);
        }

        tracing::info!("Generating {} dummy customers...", count);
        let rows = synthetic_customers(count);

        let mut tx = self.pool.begin().await?;
        for (nama, alamat) in &rows {
            sqlx::query("INSERT INTO pelanggan (nama, alamat) VALUES (?1, ?2)")
                .bind(nama)
                .bind(alamat)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::info!("{} dummy customers created", rows.len());
        Ok(rows.len())
    }

    pub async fn count_all(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pelanggan")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn list_page(&self, query: &ListQuery) -> Result<DataTableResponse> {
        let total = self.count_all().await?;

        let mut count = query.count_statement();
        let (filtered,): (i64,) = count.build_query_as::<(i64,)>().fetch_one(&self.pool).await?;

        let mut page = query.page_statement();
        let data: Vec<Pelanggan> = page.build_query_as::<Pelanggan>().fetch_all(&self.pool).await?;

        Ok(DataTableResponse {
            data,
            total,
            filtered,
            page: query.page,
            limit: query.limit,
        })
    }

    pub async fn insert(&self, nama: &str, alamat: &str) -> Result<Pelanggan> {
        let id = sqlx::query("INSERT INTO pelanggan (nama, alamat) VALUES (?1, ?2)")
            .bind(nama)
            .bind(alamat)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Pelanggan {
            id,
            nama: nama.to_string(),
            alamat: alamat.to_string(),
        })
    }

    /// Returns the number of rows removed; an unknown id removes nothing.
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM pelanggan WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

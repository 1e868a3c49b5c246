//! Customer records and listing responses

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pelanggan {
    pub id: i64,
    pub nama: String,
    pub alamat: String,
}

/// One page of customers plus the counts a table UI needs to render
/// "N of M records"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTableResponse {
    pub data: Vec<Pelanggan>,
    /// Rows in the table, ignoring filters
    pub total: i64,
    /// Rows matching the filters, ignoring pagination
    pub filtered: i64,
    pub page: i64,
    pub limit: i64,
}

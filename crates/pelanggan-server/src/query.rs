//! Listing query assembly
//!
//! Raw page/limit/sort/search parameters are normalized into a [`ListQuery`],
//! which then renders the filtered count statement and the page statement.
//! Filter values and LIMIT/OFFSET are always bound; only the whitelisted
//! sort column and direction are written into the SQL text.

use lapak_core::params::{positive_or, QueryParams};
use sqlx::{QueryBuilder, Sqlite};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Id,
    Nama,
    Alamat,
}

impl SortColumn {
    /// Anything outside the whitelist, including an empty value, sorts by id.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("nama") => SortColumn::Nama,
            Some("alamat") => SortColumn::Alamat,
            _ => SortColumn::Id,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Nama => "nama",
            SortColumn::Alamat => "alamat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the exact string `desc` sorts descending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Query-string parameters of `GET /api/data`, kept as raw strings so that
/// malformed numbers fall back to defaults instead of rejecting the request
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub search_nama: Option<String>,
    pub search_alamat: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: i64,
    pub limit: i64,
    pub sort: SortColumn,
    pub order: SortOrder,
    pub search_nama: Option<String>,
    pub search_alamat: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: SortColumn::Id,
            order: SortOrder::Asc,
            search_nama: None,
            search_alamat: None,
        }
    }
}

impl From<&QueryParams> for ListParams {
    fn from(params: &QueryParams) -> Self {
        let take = |key: &str| params.get(key).map(str::to_string);
        Self {
            page: take("page"),
            limit: take("limit"),
            sort: take("sort"),
            order: take("order"),
            search_nama: take("search_nama"),
            search_alamat: take("search_alamat"),
        }
    }
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        Self {
            page: positive_or(params.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or(params.limit.as_deref(), DEFAULT_LIMIT),
            sort: SortColumn::parse(params.sort.as_deref()),
            order: SortOrder::parse(params.order.as_deref()),
            search_nama: params.search_nama.filter(|s| !s.is_empty()),
            search_alamat: params.search_alamat.filter(|s| !s.is_empty()),
        }
    }
}

impl ListQuery {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `SELECT COUNT(*)` over the filtered rows, without pagination
    pub fn count_statement(&self) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM pelanggan");
        self.push_filters(&mut builder);
        builder
    }

    /// The requested page of filtered, sorted rows
    pub fn page_statement(&self) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new("SELECT id, nama, alamat FROM pelanggan");
        self.push_filters(&mut builder);
        builder
            .push(" ORDER BY ")
            .push(self.sort.as_sql())
            .push(" ")
            .push(self.order.as_sql());
        builder
            .push(" LIMIT ")
            .push_bind(self.limit)
            .push(" OFFSET ")
            .push_bind(self.offset());
        builder
    }

    /// Search values are not escaped: `%` and `_` inside them keep their
    /// LIKE wildcard meaning.
    fn push_filters(&self, builder: &mut QueryBuilder<'static, Sqlite>) {
        let mut keyword = " WHERE ";
        if let Some(nama) = &self.search_nama {
            builder
                .push(keyword)
                .push("nama LIKE ")
                .push_bind(format!("%{}%", nama));
            keyword = " AND ";
        }
        if let Some(alamat) = &self.search_alamat {
            builder
                .push(keyword)
                .push("alamat LIKE ")
                .push_bind(format!("%{}%", alamat));
        }
    }
}

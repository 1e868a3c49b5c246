//! Customer handlers
//!
//! Every endpoint reads its parameters from the query string. A repeated
//! key keeps its first value.

use crate::models::{DataTableResponse, Pelanggan};
use crate::query::{ListParams, ListQuery};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use lapak_core::params::{parse_id, require_text, QueryParams};
use lapak_core::LapakError;

pub async fn data(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<DataTableResponse>, LapakError> {
    let query = ListQuery::from(ListParams::from(&params));
    let page = state.directory.list(&query).await?;
    Ok(Json(page))
}

pub async fn add(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<Pelanggan>, LapakError> {
    let nama = require_text("nama", params.get("nama"))?;
    let alamat = require_text("alamat", params.get("alamat"))?;

    let pelanggan = state.directory.add(&nama, &alamat).await?;
    Ok(Json(pelanggan))
}

/// Always 204: an unknown or malformed id matches no row.
pub async fn delete(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<StatusCode, LapakError> {
    if let Some(id) = parse_id(params.get("id")) {
        state.directory.delete(id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

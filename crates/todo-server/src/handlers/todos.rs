//! Todo handlers
//!
//! Parameters come from the query string and a repeated key keeps its first
//! value. On toggle, a missing or non-integer `id` is a client error (400)
//! while a well-formed id with no matching item is 404. Delete never fails
//! on the id.

use crate::models::Todo;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use lapak_core::params::{parse_id, require_text, QueryParams};
use lapak_core::LapakError;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todos.list().await)
}

pub async fn add(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<Todo>, LapakError> {
    let text = require_text("text", params.get("text"))?;
    let todo = state.todos.add(&text).await?;
    Ok(Json(todo))
}

pub async fn toggle(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<Todo>, LapakError> {
    let id = parse_id(params.get("id"))
        .ok_or_else(|| LapakError::Validation("id must be an integer".to_string()))?;

    let todo = state.todos.toggle(id).await?;
    Ok(Json(todo))
}

/// Always 204: an unknown or malformed id matches no item.
pub async fn delete(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<StatusCode, LapakError> {
    if let Some(id) = parse_id(params.get("id")) {
        state.todos.delete(id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

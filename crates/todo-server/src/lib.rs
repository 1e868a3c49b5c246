//! Todo Server
//!
//! Todo list manager. SQLite is the source of truth; an in-memory mirror of
//! the table, loaded at startup and written through on every mutation,
//! serves reads.

pub mod handlers;
pub mod models;
pub mod services;
pub mod storage;

use axum::{routing::get, Router};
use lapak_core::config::ConfigDefaults;
use lapak_core::routes::static_routes;
use lapak_core::{Result, ServerConfig};
use services::TodoList;
use std::path::Path;
use std::sync::Arc;
use storage::TodoDatabase;
use tower_http::trace::TraceLayer;

/// Fallbacks for settings missing from the environment. Paths are relative
/// to the working directory.
pub const DEFAULTS: ConfigDefaults = ConfigDefaults {
    bind_address: "0.0.0.0:8081",
    database_path: "./todos.db",
    static_dir: "./static",
};

/// Front-end files served next to `index.html`
pub const STATIC_ASSETS: &[&str] = &["app.js"];

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<TodoList>,
}

impl AppState {
    pub async fn load(db: TodoDatabase) -> Result<Self> {
        Ok(Self {
            todos: Arc::new(TodoList::load(db).await?),
        })
    }
}

/// Open the store and fill the cache before any request is served.
pub async fn bootstrap(config: &ServerConfig) -> Result<AppState> {
    let db = TodoDatabase::open(&config.database_path).await?;
    AppState::load(db).await
}

pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/todos", get(handlers::todos::list))
        .route("/api/add", get(handlers::todos::add))
        .route("/api/toggle", get(handlers::todos::toggle))
        .route("/api/delete", get(handlers::todos::delete))
        .merge(static_routes(static_dir, STATIC_ASSETS))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

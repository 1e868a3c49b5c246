//! Pelanggan Server
//!
//! Customer record browser: a paginated, sortable, searchable listing over a
//! single SQLite table, plus create and delete endpoints and a static front
//! end.

pub mod handlers;
pub mod models;
pub mod query;
pub mod services;
pub mod storage;

use axum::{routing::get, Router};
use lapak_core::config::ConfigDefaults;
use lapak_core::routes::static_routes;
use lapak_core::{Result, ServerConfig};
use services::CustomerDirectory;
use std::path::Path;
use std::sync::Arc;
use storage::{CustomerDatabase, SEED_COUNT};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Fallbacks for settings missing from the environment. Paths are relative
/// to the working directory.
pub const DEFAULTS: ConfigDefaults = ConfigDefaults {
    bind_address: "0.0.0.0:8080",
    database_path: "./data.db",
    static_dir: "./static",
};

/// Front-end files served next to `index.html`
pub const STATIC_ASSETS: &[&str] = &["app.js"];

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<CustomerDirectory>,
}

impl AppState {
    pub fn new(db: CustomerDatabase) -> Self {
        Self {
            directory: Arc::new(CustomerDirectory::new(db)),
        }
    }
}

/// Open the store, seeding it on first startup, and build the state.
pub async fn bootstrap(config: &ServerConfig) -> Result<AppState> {
    let db = CustomerDatabase::open(&config.database_path).await?;

    let seeded = db.seed_if_empty(SEED_COUNT).await?;
    if seeded == 0 {
        info!("Customer table already populated, skipping seed");
    }

    Ok(AppState::new(db))
}

pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/data", get(handlers::customers::data))
        .route("/api/add", get(handlers::customers::add))
        .route("/api/delete", get(handlers::customers::delete))
        .merge(static_routes(static_dir, STATIC_ASSETS))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

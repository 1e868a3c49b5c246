//! Todo server binary

use anyhow::{Context, Result};
use lapak_core::{telemetry, ServerConfig};
use todo_server::DEFAULTS;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    telemetry::init("todo_server=info,lapak_core=info,tower_http=info");

    info!("Starting todo server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config =
        ServerConfig::load("TODO", &DEFAULTS).context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, db={}, static={}",
        config.bind_address,
        config.database_path,
        config.static_dir.display()
    );

    let state = todo_server::bootstrap(&config)
        .await
        .context("Failed to load todos")?;

    let app = todo_server::app(state, &config.static_dir);

    let addr = config.socket_addr().context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

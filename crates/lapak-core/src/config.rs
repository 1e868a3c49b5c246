//! Service configuration
//!
//! Every service reads the same three settings. Built-in defaults are
//! overlaid by environment variables carrying a per-service prefix, e.g.
//! `PELANGGAN_BIND_ADDRESS` or `TODO_DATABASE_PATH`.

use crate::error::Result;
use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database_path: String,
    pub static_dir: PathBuf,
}

/// Built-in values used when no environment override is present
#[derive(Debug, Clone)]
pub struct ConfigDefaults {
    pub bind_address: &'static str,
    pub database_path: &'static str,
    pub static_dir: &'static str,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load(prefix: &str, defaults: &ConfigDefaults) -> Result<Self> {
        Self::load_with(prefix, defaults, None)
    }

    /// Load configuration, reading variables from `vars` instead of the
    /// process environment when given
    pub fn load_with(
        prefix: &str,
        defaults: &ConfigDefaults,
        vars: Option<Map<String, String>>,
    ) -> Result<Self> {
        let settings = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("database_path", defaults.database_path)?
            .set_default("static_dir", defaults.static_dir)?
            .add_source(Environment::with_prefix(prefix).source(vars))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address.parse().map_err(|e| {
            ConfigError::Message(format!(
                "invalid bind address {:?}: {}",
                self.bind_address, e
            ))
            .into()
        })
    }
}

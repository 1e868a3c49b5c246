//! Lapak Core Library
//!
//! Plumbing shared by the lapak HTTP services: errors, configuration,
//! the SQLite pool opener, logging and static asset routes.

pub mod config;
pub mod database;
pub mod error;
pub mod params;
pub mod routes;
pub mod telemetry;

pub use crate::config::ServerConfig;
pub use crate::error::{LapakError, Result};

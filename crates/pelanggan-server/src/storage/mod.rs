//! Storage layer

pub mod db;
pub mod seed;

pub use db::CustomerDatabase;
pub use seed::SEED_COUNT;

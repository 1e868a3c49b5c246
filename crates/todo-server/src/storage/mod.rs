//! Storage layer
//!
//! SQLite holds the todo table; an in-memory mirror of the whole table serves
//! reads.

pub mod cache;
pub mod db;

pub use cache::TodoCache;
pub use db::TodoDatabase;

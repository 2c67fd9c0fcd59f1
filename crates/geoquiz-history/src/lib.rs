//! Geoquiz History: score log storage backends.
//!
//! Implementations of [`geoquiz_core::history::ScoreHistoryStore`]: a JSON
//! key-value directory for durable storage and an in-memory store.

pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileHistoryStore;
pub use memory_store::InMemoryHistoryStore;

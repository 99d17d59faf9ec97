//! Storage layer for the waitlist
//!
//! PostgreSQL-backed persistence for signups and visitor records, with an
//! in-memory backend for local runs and tests.

mod backend;
pub mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
pub use traits::{SignupStore, VisitorStore};

//! MyVacation database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! SQLite-backed key-value store.
//!
//! # Usage
//!
//! ```no_run
//! use myvacation::database::{Database, SqliteStore};
//!
//! let db = Database::open("myvacation.db").expect("failed to open database");
//! let store = SqliteStore::new(db);
//! ```

pub mod connection;
pub mod migrations;
pub mod sqlite_store;

pub use connection::Database;
pub use sqlite_store::SqliteStore;

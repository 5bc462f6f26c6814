//! SQLite storage implementation for Poseidon.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `poseidon-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all reference-data entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. All other crates are database-agnostic and work with traits.

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod bids;
pub mod curve_points;
pub mod ratings;
pub mod rule_names;
pub mod trades;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from poseidon-core for convenience
pub use poseidon_core::errors::{DatabaseError, Error, Result};

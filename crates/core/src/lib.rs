//! Poseidon Core - Domain entities, services, and traits.
//!
//! This crate contains the reference-data domain for Poseidon.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod bids;
pub mod curve_points;
pub mod errors;
pub mod ratings;
pub mod rule_names;
pub mod trades;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

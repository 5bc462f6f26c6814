//! Poseidon server library.
//!
//! Exposed as a library so integration tests can assemble the full
//! application the same way `main` does.

pub mod config;
pub mod error;
pub mod main_lib;
pub mod session;
pub mod web;

pub use main_lib::{build_state, init_tracing, AppState};

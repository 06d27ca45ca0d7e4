//! Gratitude garden HTTP server.
//!
//! Exposed as a library so integration tests can build the router and
//! application state without spawning a process.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};

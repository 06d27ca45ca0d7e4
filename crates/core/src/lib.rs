//! Garden Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the gratitude garden.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod entries;
pub mod errors;
pub mod garden;
pub mod goals;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

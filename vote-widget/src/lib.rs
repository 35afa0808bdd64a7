//! Vote Widget Application
//!
//! This library provides the process-level functionality for running the
//! vote widget against a PostgreSQL store, including configuration
//! management, error handling, and dependency injection.

pub mod config;
pub mod errors;

pub use config::Dependencies;
pub use errors::VotingError;

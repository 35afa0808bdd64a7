//! # Vote Widget Repository
//! This crate provides the trait and implementations for interacting with
//! the vote data store. It includes definitions for errors, interfaces,
//! and a concrete implementation for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::VoteStoreError;
pub use interfaces::VoteStore;
pub use postgres::PostgresVoteStore;

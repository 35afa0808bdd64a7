//! Error types for the vote store.
//! Defines specific errors that can occur during database operations on
//! vote records.
use thiserror::Error;

/// Represents errors that can occur within the vote store.
///
/// This enum consolidates various error conditions specific to database
/// interactions, such as SQLx errors during read or write operations.
#[derive(Debug, Error)]
pub enum VoteStoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid vote choice: {0}")]
    InvalidVoteChoice(i16),
}

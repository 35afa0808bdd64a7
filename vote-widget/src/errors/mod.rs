//! Error types for the vote widget application.
//! Consolidates errors from dependency wiring and the underlying store.
#[derive(Debug, thiserror::Error)]
pub enum VotingError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Vote store error: {0}")]
    VoteStore(#[from] vote_widget_repository::VoteStoreError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

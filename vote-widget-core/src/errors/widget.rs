//! Error types for the vote widget component.
//! Defines the errors that can occur while synchronizing vote state with
//! the store, consolidating read and write failures.
use thiserror::Error;
use vote_widget_repository::VoteStoreError;

/// Represents errors that can occur within the vote widget.
///
/// Both kinds are terminal for the triggering operation; neither is retried.
/// They are caught at the component boundary and reduced to a diagnostic
/// log entry rather than surfaced to the user.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Vote lookup failed: {0}")]
    ReadFailure(#[source] VoteStoreError),

    #[error("Vote submission failed: {0}")]
    WriteFailure(#[source] VoteStoreError),
}

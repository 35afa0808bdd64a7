//! This module defines the `VoteStore` trait, which provides an interface
//! for reading and writing a user's vote on a record.
//! It abstracts the persistence backing the widget.
use crate::errors::VoteStoreError;
use vote_widget_shared::types::{RecordId, UserId, VoteRecord, VoteSubmission};

/// A trait that defines the interface for interacting with the vote data store.
///
/// Implementors of this trait provide methods for reading the current vote of
/// a `(record, user)` pair and for recording a new vote.
#[async_trait::async_trait]
pub trait VoteStore: Send + Sync {
    /// Reads the current vote for the given `(record, user)` pair.
    ///
    /// Absence of a vote is not an error; it is reported as `Ok(None)`.
    ///
    /// # Arguments
    ///
    /// * `record_id` - Identifier of the record being voted on.
    /// * `user_id` - Identifier of the voting user.
    ///
    /// # Returns
    ///
    /// A `Result` holding the stored `VoteRecord` if one exists, or a
    /// `VoteStoreError` if the lookup fails.
    async fn get_vote(
        &self,
        record_id: &RecordId,
        user_id: &UserId,
    ) -> Result<Option<VoteRecord>, VoteStoreError>;

    /// Records a vote, overwriting any previous vote for the same pair.
    ///
    /// Idempotency is the store's responsibility; `submission.had_prior_vote`
    /// is an advisory hint of whether this is an update or a first vote.
    ///
    /// # Arguments
    ///
    /// * `submission` - The vote write payload.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `VoteStoreError` if the write fails.
    async fn record_vote(&self, submission: &VoteSubmission) -> Result<(), VoteStoreError>;
}

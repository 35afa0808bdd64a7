use crate::types::{RecordId, UserId, VoteChoice};
use serde::{Deserialize, Serialize};

/// Represents a vote write request submitted to the vote store.
///
/// `had_prior_vote` is an advisory hint telling the store whether this is
/// an update of an existing vote or a first vote; idempotency remains the
/// store's responsibility either way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteSubmission {
    pub record_id: RecordId,
    pub user_id: UserId,
    /// Opaque label of the subject record's type, e.g. `"Answer__c"`.
    pub object_kind: String,
    pub choice: VoteChoice,
    pub had_prior_vote: bool,
}

use crate::types::{RecordId, UserId, VoteChoice};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a user's stored vote on a record.
///
/// At most one `VoteRecord` exists per `(record_id, user_id)` pair; a new
/// vote overwrites the previous one rather than duplicating it. The record
/// is owned by the vote store and only read or replaced by the widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRecord {
    pub record_id: RecordId,
    pub user_id: UserId,
    pub choice: VoteChoice,
    pub voted_at: DateTime<Utc>,
}

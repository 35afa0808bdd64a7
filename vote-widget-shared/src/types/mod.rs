mod toast;
mod vote_choice;
mod vote_record;
mod vote_submission;
mod widget_state;

pub use toast::ToastSeverity;
pub use vote_choice::VoteChoice;
pub use vote_record::VoteRecord;
pub use vote_submission::VoteSubmission;
pub use widget_state::WidgetState;

/// Opaque identifier of the record being voted on.
pub type RecordId = String;

/// Opaque identifier of the voting user.
pub type UserId = String;

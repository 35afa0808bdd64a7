use crate::errors::NotificationHubError;
use vote_widget_shared::types::RecordId;

/// Trait for informing other consumers that a record's cached data changed.
///
/// This trait provides a clean abstraction over the host platform's refresh
/// mechanism. The widget calls it after a successful vote write so other
/// consumers of the record can re-read their data.
#[async_trait::async_trait]
pub trait NotificationHub: Send + Sync {
    async fn notify_changed(&self, record_ids: &[RecordId]) -> Result<(), NotificationHubError>;
}

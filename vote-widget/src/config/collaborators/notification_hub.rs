use tokio::sync::broadcast;
use vote_widget_core::{NotificationHub, NotificationHubError};
use vote_widget_shared::types::RecordId;

/// Notification hub backed by a tokio broadcast channel.
///
/// Each changed record id is fanned out to every subscriber. Consumers that
/// cache record data subscribe and re-read on receipt.
pub struct BroadcastNotificationHub {
    sender: broadcast::Sender<RecordId>,
}

impl BroadcastNotificationHub {
    /// Creates a new hub with the given channel capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of pending notifications retained per subscriber
    ///
    /// # Returns
    ///
    /// A new `BroadcastNotificationHub` instance.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to record-changed notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<RecordId> {
        self.sender.subscribe()
    }
}

#[async_trait::async_trait]
impl NotificationHub for BroadcastNotificationHub {
    /// Publishes each record id to all current subscribers.
    ///
    /// Delivery fails only when no subscriber is listening, which the
    /// widget treats as a logged warning rather than a hard error.
    async fn notify_changed(&self, record_ids: &[RecordId]) -> Result<(), NotificationHubError> {
        for record_id in record_ids {
            self.sender
                .send(record_id.clone())
                .map_err(|e| NotificationHubError::Delivery(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_changed_record() {
        let hub = BroadcastNotificationHub::new(16);
        let mut receiver = hub.subscribe();

        hub.notify_changed(&["rec1".to_string(), "rec2".to_string()])
            .await
            .unwrap();

        assert_eq!(receiver.recv().await.unwrap(), "rec1");
        assert_eq!(receiver.recv().await.unwrap(), "rec2");
    }

    #[tokio::test]
    async fn test_notify_without_subscribers_is_a_delivery_error() {
        let hub = BroadcastNotificationHub::new(16);
        let result = hub.notify_changed(&["rec1".to_string()]).await;
        assert!(matches!(result, Err(NotificationHubError::Delivery(_))));
    }
}

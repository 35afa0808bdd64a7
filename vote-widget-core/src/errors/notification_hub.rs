//! Error types for the notification hub seam.
use thiserror::Error;

/// Represents errors raised by a notification hub implementation.
///
/// Hub failures are not specially handled by the widget beyond a warning
/// log; the variant carries the implementation's description.
#[derive(Debug, Error)]
pub enum NotificationHubError {
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

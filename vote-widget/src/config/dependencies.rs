use crate::config::collaborators::{BroadcastNotificationHub, TracingToastPresenter};
use crate::errors::VotingError;
use std::sync::Arc;
use vote_widget_core::{NotificationHub, ToastPresenter};
use vote_widget_repository::PostgresVoteStore;
use vote_widget_repository::VoteStore;

const NOTIFICATION_CAPACITY: usize = 64;

/// `Dependencies` struct holds the collaborators required by the vote widget.
///
/// It includes the vote store for persistence, the notification hub for
/// informing other record consumers, and the toast presenter for transient
/// user messages.
pub struct Dependencies {
    pub vote_store: Arc<dyn VoteStore>,
    pub notification_hub: Arc<BroadcastNotificationHub>,
    pub toast_presenter: Arc<dyn ToastPresenter>,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance.
    ///
    /// This asynchronous function is responsible for initializing and wiring
    /// up the external services required by the widget: it connects the
    /// PostgreSQL pool from `DATABASE_URL`, ensures the vote schema exists,
    /// and constructs the process-local hub and presenter.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `VotingError` if any dependency fails to initialize.
    pub async fn new() -> Result<Self, VotingError> {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let pool = sqlx::PgPool::connect(&database_url).await?;
        let vote_store = PostgresVoteStore::new(pool).await?;
        vote_store.ensure_schema().await?;

        Ok(Dependencies {
            vote_store: Arc::new(vote_store),
            notification_hub: Arc::new(BroadcastNotificationHub::new(NOTIFICATION_CAPACITY)),
            toast_presenter: Arc::new(TracingToastPresenter),
        })
    }

    /// Returns the hub as the trait object the widget consumes.
    pub fn hub_handle(&self) -> Arc<dyn NotificationHub> {
        self.notification_hub.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[tokio::test]
    #[serial]
    #[should_panic(expected = "DATABASE_URL must be set")]
    async fn test_dependencies_new_missing_database_url() {
        unsafe {
            env::remove_var("DATABASE_URL");
        }

        let _ = Dependencies::new().await;
    }

    #[tokio::test]
    #[serial]
    async fn test_dependencies_new_invalid_database_url() {
        unsafe {
            env::set_var("DATABASE_URL", "invalid-database-url");
        }

        let result = Dependencies::new().await;
        assert!(matches!(result, Err(VotingError::Database(_))));
    }
}

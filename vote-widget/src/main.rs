use dotenv::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vote_widget::{Dependencies, VotingError};
use vote_widget_core::VoteWidget;

const OBJECT_KIND: &str = "Answer__c";

/// Main entry point for the vote widget application.
///
/// Initializes dotenv and tracing, wires the application dependencies,
/// activates a widget for the `(RECORD_ID, USER_ID)` pair supplied by the
/// environment, and drives it with `up`/`down` intents read from stdin. A
/// background task drains the notification hub and logs refresh requests
/// the way a record-data consumer would react to them.
///
/// # Returns
///
/// A `Result` indicating success or a `VotingError` if an error occurs
/// during initialization or execution.
#[tokio::main]
async fn main() -> Result<(), VotingError> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let record_id = std::env::var("RECORD_ID").expect("RECORD_ID must be set");
    let user_id = std::env::var("USER_ID").expect("USER_ID must be set");

    let dependencies = Dependencies::new().await?;

    let mut refresh = dependencies.notification_hub.subscribe();
    tokio::spawn(async move {
        while let Ok(record_id) = refresh.recv().await {
            info!(%record_id, "record data changed, refresh requested");
        }
    });

    let mut widget = VoteWidget::new(
        record_id,
        user_id,
        OBJECT_KIND.to_string(),
        dependencies.vote_store.clone(),
        dependencies.hub_handle(),
        dependencies.toast_presenter.clone(),
    );
    widget.activate().await;
    info!(
        record_id = %widget.record_id(),
        upvote_selected = widget.upvote_selected(),
        downvote_selected = widget.downvote_selected(),
        "widget activated"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "up" => widget.upvote().await,
            "down" => widget.downvote().await,
            "quit" => break,
            "" => {}
            other => warn!(intent = other, "unknown intent, expected up/down/quit"),
        }
    }

    Ok(())
}

//! This module defines the `VoteWidget` component responsible for owning
//! local vote state for one `(record, user)` pair.
//! It loads the prior vote on activation, applies optimistic transitions on
//! user vote actions, and issues refresh notifications and toasts through
//! its collaborator seams.
use crate::errors::WidgetError;
use crate::interfaces::{NotificationHub, ToastPresenter};
use std::sync::Arc;
use vote_widget_shared::types::{
    RecordId, ToastSeverity, UserId, VoteChoice, VoteSubmission, WidgetState,
};
use vote_widget_repository::VoteStore;

const ALREADY_UPVOTED_MESSAGE: &str = "Already upvoted!";
const ALREADY_DOWNVOTED_MESSAGE: &str = "Already downvoted!";
const WRITE_FAILED_MESSAGE: &str = "Your vote could not be saved.";

/// `VoteWidget` owns the vote state for one `(record, user)` pair.
///
/// Every input is an explicit construction parameter: the identifiers, the
/// subject's object kind, and the three collaborator seams. The widget holds
/// the only mutable copy of its `WidgetState` and re-derives it from scratch
/// on each activation.
pub struct VoteWidget {
    record_id: RecordId,
    user_id: UserId,
    object_kind: String,
    state: WidgetState,
    /// Single-slot guard: at most one vote write in flight per widget.
    /// `&mut self` on the vote actions already serializes calls, so this
    /// flag is never observed set from within this module; it is the
    /// explicit gate checked before each write.
    write_in_flight: bool,
    vote_store: Arc<dyn VoteStore>,
    notification_hub: Arc<dyn NotificationHub>,
    toast_presenter: Arc<dyn ToastPresenter>,
}

impl VoteWidget {
    /// Creates a new `VoteWidget` instance for a `(record, user)` pair.
    ///
    /// # Arguments
    ///
    /// * `record_id` - Identifier of the record being voted on
    /// * `user_id` - Identifier of the current user, immutable for the
    ///   widget's lifetime
    /// * `object_kind` - Opaque label of the record's type, forwarded to the
    ///   store on every write
    /// * `vote_store` - Persistence seam for vote records
    /// * `notification_hub` - Seam for informing other record consumers
    /// * `toast_presenter` - Seam for transient user messages
    ///
    /// # Returns
    ///
    /// A new `VoteWidget` in its initial state (`choice = None`, loading).
    pub fn new(
        record_id: RecordId,
        user_id: UserId,
        object_kind: String,
        vote_store: Arc<dyn VoteStore>,
        notification_hub: Arc<dyn NotificationHub>,
        toast_presenter: Arc<dyn ToastPresenter>,
    ) -> Self {
        Self {
            record_id,
            user_id,
            object_kind,
            state: WidgetState::new(),
            write_in_flight: false,
            vote_store,
            notification_hub,
            toast_presenter,
        }
    }

    /// Loads the user's prior vote from the store.
    ///
    /// On success with a record present the widget adopts its choice; with
    /// no record the choice stays `None`. A lookup failure is logged and the
    /// state is left at its default, without retrying. `is_loading` is
    /// cleared on every path.
    pub async fn activate(&mut self) {
        match self
            .vote_store
            .get_vote(&self.record_id, &self.user_id)
            .await
        {
            Ok(Some(record)) => {
                self.state.choice = Some(record.choice);
            }
            Ok(None) => {}
            Err(e) => {
                let err = WidgetError::ReadFailure(e);
                tracing::error!(record_id = %self.record_id, error = %err, "failed to load prior vote");
            }
        }
        self.state.is_loading = false;
    }

    /// Handles an upvote intent from the user.
    pub async fn upvote(&mut self) {
        self.cast_vote(VoteChoice::Upvote).await;
    }

    /// Handles a downvote intent from the user.
    pub async fn downvote(&mut self) {
        self.cast_vote(VoteChoice::Downvote).await;
    }

    /// Applies a vote transition towards `choice`.
    ///
    /// A self-transition (voting the way the user already voted) is rejected
    /// with an informational toast and no store call. At most one write is in
    /// flight per widget: an intent arriving while a write is pending is
    /// dropped. Otherwise the local state transitions optimistically, the
    /// write is submitted, and on ack the notification hub is told the
    /// record's data changed. A write failure keeps the optimistic value and
    /// surfaces an error toast. Busy flags are cleared on both outcomes.
    async fn cast_vote(&mut self, choice: VoteChoice) {
        if self.state.choice == Some(choice) {
            let (message, severity) = match choice {
                VoteChoice::Upvote => (ALREADY_UPVOTED_MESSAGE, ToastSeverity::Info),
                VoteChoice::Downvote => (ALREADY_DOWNVOTED_MESSAGE, ToastSeverity::Warning),
            };
            self.toast_presenter.present("", message, severity);
            return;
        }

        if self.write_in_flight {
            tracing::debug!(record_id = %self.record_id, "vote write already in flight, dropping intent");
            return;
        }

        self.write_in_flight = true;
        self.state.is_loading = true;

        let had_prior_vote = self.state.choice.is_some();
        self.state.choice = Some(choice);

        let submission = VoteSubmission {
            record_id: self.record_id.clone(),
            user_id: self.user_id.clone(),
            object_kind: self.object_kind.clone(),
            choice,
            had_prior_vote,
        };
        let result = self.vote_store.record_vote(&submission).await;

        self.write_in_flight = false;
        self.state.is_loading = false;

        match result {
            Ok(()) => {
                if let Err(e) = self
                    .notification_hub
                    .notify_changed(std::slice::from_ref(&self.record_id))
                    .await
                {
                    tracing::warn!(record_id = %self.record_id, error = %e, "failed to notify record change");
                }
            }
            Err(e) => {
                // Optimistic value is kept; the user sees the failure as a toast.
                let err = WidgetError::WriteFailure(e);
                tracing::error!(record_id = %self.record_id, error = %err, "failed to record vote");
                self.toast_presenter
                    .present("", WRITE_FAILED_MESSAGE, ToastSeverity::Error);
            }
        }
    }

    /// Returns the widget's current state.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Returns whether the upvote affordance renders as selected.
    pub fn upvote_selected(&self) -> bool {
        self.state.upvote_selected()
    }

    /// Returns whether the downvote affordance renders as selected.
    pub fn downvote_selected(&self) -> bool {
        self.state.downvote_selected()
    }

    /// Returns the identifier of the record this widget is bound to.
    pub fn record_id(&self) -> &RecordId {
        &self.record_id
    }
}

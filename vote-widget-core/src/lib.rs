//! # Vote Widget Core
//! This crate implements the vote widget component: local vote state for one
//! `(record, user)` pair, loaded from the vote store on activation and
//! mutated by user vote actions, with downstream refresh notifications and
//! user-facing toasts issued through collaborator seams.
pub mod errors;
pub mod interfaces;
pub mod widget;

pub use errors::{NotificationHubError, WidgetError};
pub use interfaces::{NotificationHub, ToastPresenter};
pub use widget::VoteWidget;

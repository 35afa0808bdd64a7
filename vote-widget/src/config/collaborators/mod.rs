mod notification_hub;
mod toast_presenter;

pub use notification_hub::BroadcastNotificationHub;
pub use toast_presenter::TracingToastPresenter;

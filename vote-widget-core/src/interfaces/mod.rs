mod notification_hub;
mod toast_presenter;

pub use notification_hub::NotificationHub;
pub use toast_presenter::ToastPresenter;

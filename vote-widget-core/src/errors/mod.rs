mod notification_hub;
mod widget;

pub use notification_hub::NotificationHubError;
pub use widget::WidgetError;

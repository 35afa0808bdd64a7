use vote_widget_shared::types::ToastSeverity;

/// Trait for displaying transient user-facing messages.
///
/// `present` is fire-and-forget: the widget never consumes a return value
/// and a presenter must not block the caller.
pub trait ToastPresenter: Send + Sync {
    fn present(&self, title: &str, message: &str, severity: ToastSeverity);
}

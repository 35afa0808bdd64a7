use tracing::{error, info, warn};
use vote_widget_core::ToastPresenter;
use vote_widget_shared::types::ToastSeverity;

/// Toast presenter that renders toasts as structured log events.
///
/// The host platform renders toasts as UI; this process surfaces them on
/// the log stream at a level matching the toast severity.
pub struct TracingToastPresenter;

impl ToastPresenter for TracingToastPresenter {
    fn present(&self, title: &str, message: &str, severity: ToastSeverity) {
        match severity {
            ToastSeverity::Error => {
                error!(title, severity = %severity, "toast: {message}");
            }
            ToastSeverity::Warning => {
                warn!(title, severity = %severity, "toast: {message}");
            }
            ToastSeverity::Success | ToastSeverity::Info => {
                info!(title, severity = %severity, "toast: {message}");
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// Severity of a transient user-facing toast message.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Warning,
    Error,
    Info,
}

impl ToastSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "success",
            ToastSeverity::Warning => "warning",
            ToastSeverity::Error => "error",
            ToastSeverity::Info => "info",
        }
    }
}

impl std::fmt::Display for ToastSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

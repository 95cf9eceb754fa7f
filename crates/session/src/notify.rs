//! User notification channel
//!
//! Fire-and-forget transient notices ("session expired, please log in again").
//! The guard only emits; rendering belongs to whatever surface consumes them.

use std::sync::Mutex;

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Sink for transient user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// Production notifier: routes notices to the tracing pipeline, where the
/// gateway's log layer surfaces them.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => tracing::error!(notice = message, "user notice"),
            Severity::Warning => tracing::warn!(notice = message, "user notice"),
            Severity::Info => tracing::info!(notice = message, "user notice"),
        }
    }
}

/// Test double that records every notice it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all notices received so far.
    pub fn notices(&self) -> Vec<(Severity, String)> {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((severity, message.to_string()));
    }
}

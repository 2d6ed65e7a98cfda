/// Transient notifications
///
/// Auth and mutation outcomes are surfaced to the user as short-lived
/// notifications (the application shell renders them as toasts; rendering
/// is not this crate's concern). Stores report through the [`Notifier`]
/// seam so the shell, the demo binary, and tests can each attach their own
/// sink.
///
/// # Example
///
/// ```
/// use taskdesk_client::notify::{LogNotifier, Notification, Notifier};
///
/// let notifier = LogNotifier;
/// notifier.notify(Notification::info("Logged in", "Welcome back!"));
/// ```
use std::sync::Mutex;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine confirmation
    Info,

    /// Failed operation
    Error,
}

/// A single transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline
    pub title: String,

    /// One-line detail
    pub body: String,

    /// Severity, drives presentation style
    pub severity: Severity,
}

impl Notification {
    /// Builds an info notification
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            body: body.into(),
            severity: Severity::Info,
        }
    }

    /// Builds an error notification
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            body: body.into(),
            severity: Severity::Error,
        }
    }
}

/// Notification sink seam
pub trait Notifier: Send + Sync {
    /// Delivers one notification
    fn notify(&self, notification: Notification);
}

/// Notifier that routes through `tracing`
///
/// Default sink for the demo binary: info notifications log at info level,
/// error notifications at warn (they are user mistakes, not system faults).
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => {
                tracing::info!(title = %notification.title, "{}", notification.body)
            }
            Severity::Error => {
                tracing::warn!(title = %notification.title, "{}", notification.body)
            }
        }
    }
}

/// Notifier that records everything it receives
///
/// For tests and demos: lets assertions inspect exactly which
/// notifications an operation produced.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    delivered: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Creates an empty recording sink
    pub fn new() -> Self {
        RecordingNotifier::default()
    }

    /// Snapshot of everything delivered so far
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Titles of everything delivered so far
    pub fn titles(&self) -> Vec<String> {
        self.delivered().into_iter().map(|n| n.title).collect()
    }

    /// Drops all recorded notifications
    pub fn clear(&self) {
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_captures_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::info("first", "a"));
        notifier.notify(Notification::error("second", "b"));

        let delivered = notifier.delivered();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].severity, Severity::Info);
        assert_eq!(delivered[1].severity, Severity::Error);
        assert_eq!(notifier.titles(), vec!["first", "second"]);

        notifier.clear();
        assert!(notifier.delivered().is_empty());
    }
}

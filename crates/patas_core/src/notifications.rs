//! Notification sink
//!
//! Collects user-facing messages during a run (startup failures, editor
//! edits) so the editor console can list them, and appends them to a plain
//! text log at shutdown. The sink is passed explicitly to whoever needs it.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use serde::{Serialize, Deserialize};

/// How serious a notification is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Regular progress message
    Normal,
    /// Informational detail
    Info,
    /// Something went wrong but was recovered
    Warning,
    /// A failure
    Error,
}

impl Severity {
    /// Numeric code shown in the console
    pub fn code(self) -> u8 {
        match self {
            Severity::Normal => 0,
            Severity::Info => 1,
            Severity::Warning => 2,
            Severity::Error => 3,
        }
    }

    /// Upper-case label used in the log file
    pub fn label(self) -> &'static str {
        match self {
            Severity::Normal => "NORMAL",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

/// A single message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Ordered collection of notifications
#[derive(Debug, Default)]
pub struct Notifications {
    messages: Vec<Notification>,
}

impl Notifications {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message and mirror it to the `log` facade
    pub fn add_message(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Normal | Severity::Info => log::info!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Error => log::error!("{}", message),
        }
        self.messages.push(Notification { severity, message });
    }

    /// All messages in the order they were added
    pub fn notifications(&self) -> &[Notification] {
        &self.messages
    }

    /// Number of recorded messages
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message has been recorded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages with the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.messages.iter().filter(|n| n.severity == severity).count()
    }

    /// Append every message to the file at `path`, one `[LABEL] text` line each
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        for n in &self.messages {
            writeln!(file, "[{}] {}", n.severity.label(), n.message)?;
        }
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_insertion_order() {
        let mut sink = Notifications::new();
        sink.add_message(Severity::Error, "first");
        sink.add_message(Severity::Normal, "second");
        sink.add_message(Severity::Error, "third");

        let texts: Vec<&str> = sink.notifications().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(sink.count(Severity::Error), 2);
    }

    #[test]
    fn test_severity_codes() {
        assert_eq!(Severity::Normal.code(), 0);
        assert_eq!(Severity::Error.code(), 3);
        assert_eq!(Severity::Warning.label(), "WARNING");
    }

    #[test]
    fn test_save_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LogData.txt");

        let mut sink = Notifications::new();
        sink.add_message(Severity::Normal, "started");
        sink.save_to_file(&path).unwrap();
        sink.save_to_file(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "[NORMAL] started\n[NORMAL] started\n");
    }
}

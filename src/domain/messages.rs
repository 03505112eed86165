//! Status Message Log
//!
//! Ordered list of status lines shown to the user. Owned by the
//! orchestrator and passed into rendering — never shared globally
//! across components. Append-only, except `replace` which resets
//! the log to exactly one entry.

use std::fmt;

use chrono::{DateTime, Utc};

/// Severity classification for a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational, no action needed.
    Info,
    /// A submission or inclusion succeeded.
    Success,
    /// Something failed; the user must resubmit manually.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Severity classification.
    pub severity: Severity,
    /// Free-form text.
    pub text: String,
    /// When the message was recorded.
    pub at: DateTime<Utc>,
}

/// Ordered sequence of status messages.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, preserving all prior entries.
    pub fn append(&mut self, severity: Severity, text: impl Into<String>) {
        self.entries.push(Message {
            severity,
            text: text.into(),
            at: Utc::now(),
        });
    }

    /// Replace the whole log with a single entry.
    pub fn replace(&mut self, severity: Severity, text: impl Into<String>) {
        self.entries.clear();
        self.append(severity, text);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Console log entry and its identifier.

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of entry identifiers.
static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier of a log entry.
///
/// Unique within the process and stable for the entry's lifetime, so it can be
/// used as a scroll target that survives padding and eviction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    /// Allocate a fresh identifier.
    pub(crate) fn next() -> Self {
        Self(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

/// Message severity. Each variant maps to a display color in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Debug output; what a bare `print` produces.
    #[default]
    Debug,
    /// Fine-grained tracing.
    Trace,
}

impl Severity {
    /// Lowercase label used in log mirroring and the view.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Trace => "trace",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message held by the console.
///
/// Immutable once created. Placeholder entries used to pre-fill the list have
/// empty text; every entry created through an append has non-blank text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    id: EntryId,
    text: String,
    created_at: DateTime<Utc>,
    severity: Severity,
}

impl LogEntry {
    pub(crate) fn new(text: String, severity: Severity) -> Self {
        Self {
            id: EntryId::next(),
            text,
            created_at: Utc::now(),
            severity,
        }
    }

    /// Blank placeholder with the default severity.
    pub(crate) fn blank() -> Self {
        Self::new(String::new(), Severity::default())
    }

    /// Stable identifier, also used as the scroll anchor.
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Message text as appended.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the entry was created. Shown on demand, never used for ordering.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Severity the message was logged at.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether this is a blank placeholder seeded at construction.
    pub fn is_padding(&self) -> bool {
        self.text.is_empty()
    }
}

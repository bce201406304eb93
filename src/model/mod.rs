//! Domain model types (pure).

pub mod error;
pub mod log_entry;

// Re-export for convenience
pub use error::{ConsoleError, StoreError};
pub use log_entry::{EntryId, LogEntry, Severity};

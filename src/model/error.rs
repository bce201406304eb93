//! Error types for the console core.
//!
//! The core has very few fallible operations:
//!
//! - [`StoreError`] - invalid store configuration. Fatal: the binary aborts
//!   initialization instead of running with a malformed buffer.
//! - [`ConsoleError`] - misuse of the process-wide console handle.
//!
//! Empty appends and inverted clamp ranges are not errors; they resolve to a
//! no-op and to the lower bound respectively.

use thiserror::Error;

/// Message store construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// More placeholder lines were requested than the store can hold.
    ///
    /// `padding` must be strictly less than `capacity` so that at least one
    /// real message fits alongside the placeholders.
    #[error("padding of {padding} blank lines must be less than capacity {capacity}")]
    PaddingExceedsCapacity {
        /// Requested placeholder count.
        padding: usize,
        /// Configured capacity.
        capacity: usize,
    },
}

/// Process-wide console handle failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// A handle was already installed; installation happens once per process.
    #[error("console handle already installed")]
    AlreadyInstalled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_error_message_names_both_values() {
        let err = StoreError::PaddingExceedsCapacity {
            padding: 42,
            capacity: 10,
        };

        let message = err.to_string();
        assert!(message.contains("42"), "got: {message}");
        assert!(message.contains("10"), "got: {message}");
    }

    #[test]
    fn already_installed_message() {
        assert_eq!(
            ConsoleError::AlreadyInstalled.to_string(),
            "console handle already installed"
        );
    }
}

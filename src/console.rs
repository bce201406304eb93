//! Logging entry points for instrumented code.
//!
//! [`MessageStore`] is owned by the UI loop and mutated from there only. Code
//! running anywhere else logs through a [`ConsoleHandle`], which sends the
//! rendered text over a channel; the loop moves pending messages into the
//! store with [`ConsoleInbox::drain_into`] on its next tick.
//!
//! A handle can also be installed process-wide once with [`install`], after
//! which the [`console_log!`](crate::console_log) macro works from any call
//! site. The installed handle lives for the rest of the process.

use crate::model::{ConsoleError, Severity};
use crate::state::MessageStore;
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<ConsoleHandle> = OnceLock::new();

/// Message in transit from a [`ConsoleHandle`] to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingMessage {
    text: String,
    severity: Severity,
}

/// Cloneable, thread-safe sender of console messages.
#[derive(Debug, Clone)]
pub struct ConsoleHandle {
    sender: Sender<PendingMessage>,
    enabled: Arc<AtomicBool>,
}

/// Receiving side of a console channel, drained on the UI loop.
#[derive(Debug)]
pub struct ConsoleInbox {
    receiver: Receiver<PendingMessage>,
}

/// Create a connected handle/inbox pair.
pub fn channel(enabled: bool) -> (ConsoleHandle, ConsoleInbox) {
    let (sender, receiver) = mpsc::channel();
    let handle = ConsoleHandle {
        sender,
        enabled: Arc::new(AtomicBool::new(enabled)),
    };
    (handle, ConsoleInbox { receiver })
}

impl ConsoleHandle {
    /// Queue a message. Never blocks.
    pub fn log(&self, text: impl Into<String>, severity: Severity) {
        if self.is_enabled() {
            self.send(text.into(), severity);
        }
    }

    /// Queue a message whose text is only rendered while logging is enabled.
    pub fn log_with<F>(&self, severity: Severity, text: F)
    where
        F: FnOnce() -> String,
    {
        if self.is_enabled() {
            self.send(text(), severity);
        }
    }

    /// Queue one debug message per item, in order.
    pub fn print_each<I>(&self, items: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        if !self.is_enabled() {
            return;
        }
        for item in items {
            self.send(item.to_string(), Severity::Debug);
        }
    }

    /// Whether messages sent through this handle are forwarded.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn logging on or off for every clone of this handle.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    fn send(&self, text: String, severity: Severity) {
        // A closed inbox means the UI is gone; dropping the message is fine.
        let _ = self.sender.send(PendingMessage { text, severity });
    }
}

impl ConsoleInbox {
    /// Append every pending message to `store` in arrival order.
    ///
    /// Returns how many messages were taken from the channel, including any
    /// the store dropped as blank.
    pub fn drain_into(&self, store: &mut MessageStore) -> usize {
        let mut drained = 0;
        while let Ok(message) = self.receiver.try_recv() {
            store.append(message.text, message.severity);
            drained += 1;
        }
        drained
    }
}

/// Install `handle` as the process-wide console.
///
/// # Errors
///
/// Returns [`ConsoleError::AlreadyInstalled`] on every call after the first.
pub fn install(handle: ConsoleHandle) -> Result<(), ConsoleError> {
    GLOBAL
        .set(handle)
        .map_err(|_| ConsoleError::AlreadyInstalled)
}

/// The process-wide console, if one has been installed.
pub fn global() -> Option<&'static ConsoleHandle> {
    GLOBAL.get()
}

/// Log through the process-wide console.
///
/// Without an installed console this is a no-op and `text` is not evaluated.
pub fn log_with<F>(severity: Severity, text: F)
where
    F: FnOnce() -> String,
{
    if let Some(handle) = global() {
        handle.log_with(severity, text);
    }
}

/// Log a formatted message to the process-wide console.
///
/// Formatting only happens when a console is installed and enabled.
///
/// ```
/// use pullup_console::console_log;
/// use pullup_console::model::Severity;
///
/// console_log!("help! {} printed from a view", 7 * 6);
/// console_log!(Severity::Info; "counter = {}", 3);
/// ```
#[macro_export]
macro_rules! console_log {
    ($severity:expr; $($arg:tt)+) => {
        $crate::console::log_with($severity, || format!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::console::log_with($crate::model::Severity::Debug, || format!($($arg)+))
    };
}

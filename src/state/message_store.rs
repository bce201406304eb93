//! Bounded, append-only message buffer backing the console panel.
//!
//! Entries are kept oldest-first. Every append that pushes the buffer past its
//! capacity evicts from the front, so the buffer always holds the most recent
//! `min(capacity, total appended)` entries in insertion order.

use crate::model::{EntryId, LogEntry, Severity, StoreError};
use crate::observer::{Observers, SubscriptionId};
use std::collections::VecDeque;

#[cfg(test)]
#[path = "message_store_tests.rs"]
mod tests;

/// Capacity and placeholder count for a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreProfile {
    /// Maximum number of entries retained.
    pub capacity: usize,
    /// Blank placeholder entries seeded at construction.
    pub padding: usize,
}

impl StoreProfile {
    /// Large buffer pre-filled with blank lines so new messages appear to
    /// arrive from the bottom of a full list.
    pub const PREVIEW_CONSOLE: StoreProfile = StoreProfile {
        capacity: 4200,
        padding: 42,
    };

    /// Small buffer with no placeholders.
    pub const PREVIEW_LOG: StoreProfile = StoreProfile {
        capacity: 200,
        padding: 0,
    };
}

/// Change notification emitted by [`MessageStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A message was appended; carries the new entry's id as a scroll target.
    Appended(EntryId),
}

/// Ring-buffer-like message store with capacity eviction and unread tracking.
#[derive(Debug)]
pub struct MessageStore {
    /// Oldest at front, newest at back
    entries: VecDeque<LogEntry>,
    capacity: usize,
    padding_count: usize,
    /// Real messages appended since the last `mark_read`
    unread_count: usize,
    enabled: bool,
    observers: Observers<StoreEvent>,
}

impl MessageStore {
    /// Create an empty store holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PaddingExceedsCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, StoreError> {
        Self::with_padding(capacity, 0)
    }

    /// Create a store pre-seeded with `padding_count` blank entries.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PaddingExceedsCapacity`] unless
    /// `padding_count < capacity`.
    pub fn with_padding(capacity: usize, padding_count: usize) -> Result<Self, StoreError> {
        if padding_count >= capacity {
            return Err(StoreError::PaddingExceedsCapacity {
                padding: padding_count,
                capacity,
            });
        }

        let mut entries = VecDeque::with_capacity(capacity.min(4096) + 1);
        entries.extend((0..padding_count).map(|_| LogEntry::blank()));

        Ok(Self {
            entries,
            capacity,
            padding_count,
            unread_count: 0,
            enabled: true,
            observers: Observers::new(),
        })
    }

    /// Create a store from a capacity/padding profile.
    pub fn from_profile(profile: StoreProfile) -> Result<Self, StoreError> {
        Self::with_padding(profile.capacity, profile.padding)
    }

    /// Append a message.
    ///
    /// Text that is empty after trimming is dropped silently: no entry, no
    /// notification. Otherwise the entry is appended, the oldest entry is
    /// evicted if capacity is exceeded, and [`StoreEvent::Appended`] is emitted.
    ///
    /// Returns the new entry's id, or `None` if nothing was recorded.
    pub fn append(&mut self, text: impl Into<String>, severity: Severity) -> Option<EntryId> {
        if !self.enabled {
            return None;
        }
        self.record(text.into(), severity)
    }

    /// Append a message whose text is produced lazily.
    ///
    /// `text` is only invoked when the store is enabled, so disabled logging
    /// costs nothing beyond the call.
    pub fn append_with<F>(&mut self, severity: Severity, text: F) -> Option<EntryId>
    where
        F: FnOnce() -> String,
    {
        if !self.enabled {
            return None;
        }
        self.record(text(), severity)
    }

    fn record(&mut self, text: String, severity: Severity) -> Option<EntryId> {
        if text.trim().is_empty() {
            return None;
        }

        mirror_to_tracing(&text, severity);

        let entry = LogEntry::new(text, severity);
        let id = entry.id();
        self.entries.push_back(entry);

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }

        self.unread_count += 1;
        self.observers.notify(&StoreEvent::Appended(id));

        Some(id)
    }

    /// All entries, oldest to newest, including any remaining placeholders.
    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    /// Number of entries, placeholders included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Placeholder count requested at construction.
    pub fn padding_count(&self) -> usize {
        self.padding_count
    }

    /// Id of the newest entry, placeholder or not.
    pub fn latest_id(&self) -> Option<EntryId> {
        self.entries.back().map(LogEntry::id)
    }

    /// Position of `id` in [`Self::entries`], if it has not been evicted.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        // Ids increase with insertion order.
        let front = self.entries.front()?.id();
        if id < front {
            return None;
        }
        self.entries
            .binary_search_by(|entry| entry.id().cmp(&id))
            .ok()
    }

    /// Real messages appended since the last [`Self::mark_read`].
    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    /// Whether there are unread messages. Reading does not change state.
    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }

    /// Reset the unread counter, typically when the panel is shown.
    pub fn mark_read(&mut self) {
        self.unread_count = 0;
    }

    /// Whether appends are currently recorded.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable recording. Disabled stores drop every append.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Register a listener for [`StoreEvent`]s.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        self.observers.subscribe(listener)
    }

    /// Remove a listener registered with [`Self::subscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

/// Echo a recorded message to the tracing subscriber at its severity.
fn mirror_to_tracing(text: &str, severity: Severity) {
    match severity {
        Severity::Info => tracing::info!(target: "pullup_console::console", "{text}"),
        Severity::Debug => tracing::debug!(target: "pullup_console::console", "{text}"),
        Severity::Trace => tracing::trace!(target: "pullup_console::console", "{text}"),
    }
}

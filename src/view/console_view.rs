//! Bottom-anchored message list widget.

use crate::geometry::clamp;
use crate::model::{EntryId, LogEntry};
use crate::state::MessageStore;
use crate::view::styles::ConsoleStyles;
use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use std::collections::VecDeque;

// ===== ConsoleScroll =====

/// Which entry sits on the bottom row of the list.
///
/// The anchor is an entry id rather than an index so that it stays put while
/// older entries are evicted from the front of the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleScroll {
    /// Entry to keep on the bottom row; `None` means the newest entry
    anchor: Option<EntryId>,
    /// Entries scrolled back above the anchor
    offset: usize,
}

impl ConsoleScroll {
    /// Pin `id` to the bottom row.
    pub fn follow(&mut self, id: EntryId) {
        self.anchor = Some(id);
        self.offset = 0;
    }

    /// Show the newest entry on the bottom row.
    pub fn to_bottom(&mut self) {
        self.anchor = None;
        self.offset = 0;
    }

    /// Scroll back towards older entries, stopping at the first one.
    pub fn scroll_up(&mut self, lines: usize, store: &MessageStore) {
        let Some(anchor) = self.anchor_index(store) else {
            return;
        };
        self.offset = clamp(self.offset.saturating_add(lines), 0, anchor);
    }

    /// Scroll forward towards the anchor.
    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Entries scrolled back above the anchor.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Entry pinned to the bottom row; `None` follows the newest.
    pub fn anchor(&self) -> Option<EntryId> {
        self.anchor
    }

    /// Index of the entry drawn on the bottom row, `None` for an empty store.
    ///
    /// An anchor that has been evicted falls back to the newest entry.
    pub fn bottom_index(&self, store: &MessageStore) -> Option<usize> {
        self.anchor_index(store)
            .map(|anchor| anchor.saturating_sub(self.offset))
    }

    fn anchor_index(&self, store: &MessageStore) -> Option<usize> {
        let newest = store.len().checked_sub(1)?;
        Some(
            self.anchor
                .and_then(|id| store.position(id))
                .unwrap_or(newest),
        )
    }
}

// ===== ConsoleView Widget =====

/// Message list drawn bottom-up from a chosen entry.
pub struct ConsoleView<'a> {
    entries: &'a VecDeque<LogEntry>,
    /// Entry on the bottom row
    bottom_index: Option<usize>,
    show_timestamps: bool,
    styles: &'a ConsoleStyles,
}

impl<'a> ConsoleView<'a> {
    /// # Arguments
    /// * `entries` - Store entries, oldest to newest
    /// * `bottom_index` - Entry drawn on the bottom row (see [`ConsoleScroll::bottom_index`])
    /// * `show_timestamps` - Prefix each line with its creation time
    /// * `styles` - Color scheme
    pub fn new(
        entries: &'a VecDeque<LogEntry>,
        bottom_index: Option<usize>,
        show_timestamps: bool,
        styles: &'a ConsoleStyles,
    ) -> Self {
        Self {
            entries,
            bottom_index,
            show_timestamps,
            styles,
        }
    }

    fn line_for(&self, entry: &LogEntry) -> Line<'static> {
        if entry.is_padding() {
            return Line::default();
        }

        let text = Span::styled(
            single_line(entry.text()),
            self.styles.for_severity(entry.severity()),
        );
        if self.show_timestamps {
            Line::from(vec![
                Span::styled(format!("@ {} ", format_timestamp(entry)), self.styles.timestamp),
                text,
            ])
        } else {
            Line::from(text)
        }
    }
}

impl Widget for ConsoleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.styles.background);

        let Some(bottom) = self.bottom_index else {
            return;
        };
        if area.height == 0 || bottom >= self.entries.len() {
            return;
        }

        let rows = usize::from(area.height);
        let start = (bottom + 1).saturating_sub(rows);
        let count = bottom + 1 - start;
        let first_row = area.bottom() - count as u16;

        for (i, entry) in self.entries.range(start..=bottom).enumerate() {
            let line = self.line_for(entry);
            buf.set_line(area.x, first_row + i as u16, &line, area.width);
        }
    }
}

/// Collapse embedded newlines so each entry occupies one row.
fn single_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}

/// Format an entry's creation time as local HH:MM:SS.
fn format_timestamp(entry: &LogEntry) -> String {
    entry
        .created_at()
        .with_timezone(&Local)
        .format("%H:%M:%S")
        .to_string()
}

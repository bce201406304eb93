//! Grab bar widget drawn above the console.
//!
//! The handle glyph points in the direction the panel moves when tapped:
//! up while closed, down while open, flat while a drag is in progress.

use crate::view::styles::ConsoleStyles;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

const HANDLE_LINE: char = '─';
const ARROW_UP: char = '▲';
const ARROW_DOWN: char = '▼';
const DRAGGING: char = '═';

/// Grab bar with a centred handle and an optional unread hint.
#[derive(Debug, Clone)]
pub struct PullUpBar<'a> {
    handle: Rect,
    open: bool,
    dragging: bool,
    /// Unread count shown while the hint pulse is on
    hint: Option<usize>,
    styles: &'a ConsoleStyles,
}

impl<'a> PullUpBar<'a> {
    /// # Arguments
    /// * `handle` - Handle area from the panel layout
    /// * `open` - Whether the panel is open
    /// * `dragging` - Whether a drag is in progress
    /// * `styles` - Color scheme
    pub fn new(handle: Rect, open: bool, dragging: bool, styles: &'a ConsoleStyles) -> Self {
        Self {
            handle,
            open,
            dragging,
            hint: None,
            styles,
        }
    }

    /// Show "N new" at the right edge of the bar.
    pub fn unread_hint(mut self, unread: usize) -> Self {
        self.hint = Some(unread);
        self
    }

    fn centre_glyph(&self) -> char {
        if self.dragging {
            DRAGGING
        } else if self.open {
            ARROW_DOWN
        } else {
            ARROW_UP
        }
    }
}

/// Handle text of `width` cells with `centre` in the middle.
fn handle_text(width: u16, centre: char) -> String {
    let width = usize::from(width);
    if width == 0 {
        return String::new();
    }
    let left = (width - 1) / 2;
    let right = width - 1 - left;

    let mut text = String::with_capacity(width * 3);
    text.extend(std::iter::repeat(HANDLE_LINE).take(left));
    text.push(centre);
    text.extend(std::iter::repeat(HANDLE_LINE).take(right));
    text
}

impl Widget for PullUpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.styles.bar);

        let handle = self.handle.intersection(area);
        if !handle.is_empty() {
            buf.set_stringn(
                handle.x,
                handle.y,
                handle_text(handle.width, self.centre_glyph()),
                usize::from(handle.width),
                self.styles.handle,
            );
        }

        if let Some(unread) = self.hint.filter(|n| *n > 0) {
            let label = format!(" {unread} new ");
            let width = label.chars().count() as u16;
            let right_of_handle = handle.right().max(area.x);
            if area.right().saturating_sub(width) >= right_of_handle {
                buf.set_string(area.right() - width, area.y, label, self.styles.hint);
            }
        }
    }
}

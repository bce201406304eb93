//! Panel geometry in terminal cells and pointer hit-testing.
//!
//! The application content fills the whole screen. The console is drawn over
//! its bottom `frame_height` rows with the grab bar directly above it.

use crate::geometry::clamp;
use crate::state::PanelState;
use ratatui::layout::Rect;

/// Minimum width of the grab handle, in cells.
const MIN_HANDLE_WIDTH: u16 = 7;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    /// Application content (the full screen, drawn underneath).
    pub content: Rect,
    /// Grab bar above the console.
    pub bar: Rect,
    /// Tappable handle centred in the bar.
    pub handle: Rect,
    /// Message list; zero height while closed.
    pub console: Rect,
}

/// What the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Handle: a click toggles the panel.
    Handle,
    /// Bar outside the handle: a press starts a drag.
    Bar,
    /// Message list.
    Console,
    /// Anything else.
    Content,
}

/// Convert a panel dimension to whole rows.
fn to_rows(value: f64) -> u16 {
    clamp(value.round(), 0.0, f64::from(u16::MAX)) as u16
}

/// Compute the panel regions inside `area` for the current panel state.
pub fn compute_layout(area: Rect, panel: &PanelState) -> PanelLayout {
    let bar_rows = to_rows(panel.geometry().bar_height).max(1).min(area.height);
    let console_rows = to_rows(panel.frame_height()).min(area.height - bar_rows);

    let console = Rect::new(
        area.x,
        area.bottom() - console_rows,
        area.width,
        console_rows,
    );
    let bar = Rect::new(area.x, console.y - bar_rows, area.width, bar_rows);

    PanelLayout {
        content: area,
        bar,
        handle: handle_rect(bar),
        console,
    }
}

/// Handle occupies the middle fifth of the bar's first row.
fn handle_rect(bar: Rect) -> Rect {
    if bar.height == 0 {
        return Rect::new(bar.x, bar.y, 0, 0);
    }
    let width = (bar.width / 5).max(MIN_HANDLE_WIDTH).min(bar.width);
    let x = bar.x + (bar.width - width) / 2;
    Rect::new(x, bar.y, width, 1)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Map a pointer position to the region under it.
pub fn hit_test(layout: &PanelLayout, column: u16, row: u16) -> HitTarget {
    if contains(layout.handle, column, row) {
        HitTarget::Handle
    } else if contains(layout.bar, column, row) {
        HitTarget::Bar
    } else if contains(layout.console, column, row) {
        HitTarget::Console
    } else {
        HitTarget::Content
    }
}

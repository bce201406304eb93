//! Pull-up panel height state machine.
//!
//! The panel grows upward from the bottom edge. A height of zero means closed;
//! any positive height means open. Every mutation clamps the height into
//! `[0, max_height]`, where `max_height` leaves room for the grab bar and a
//! fixed top margin.

use crate::geometry::clamp;
use crate::observer::{Observers, SubscriptionId};

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;

/// Screen extent assumed until the layout reports a real one.
pub const DEFAULT_SCREEN_HEIGHT: f64 = 800.0;

/// Fixed dimensions of the panel chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    /// Height of the grab bar above the panel.
    pub bar_height: f64,
    /// Space kept free at the top of the screen when fully open.
    pub top_margin: f64,
    /// Height used the first time the panel is opened by a tap.
    pub default_open_height: f64,
}

impl PanelGeometry {
    /// Bar of 26 with a 30 margin, opening to 142.
    pub fn preview_console() -> Self {
        Self {
            bar_height: 26.0,
            top_margin: 30.0,
            default_open_height: 142.0,
        }
    }

    /// Bar of 22 with three bar heights of total clearance, opening to 200.
    pub fn preview_log() -> Self {
        Self {
            bar_height: 22.0,
            top_margin: 44.0,
            default_open_height: 200.0,
        }
    }

    /// Terminal cell units: one-row bar, one-row margin, opening to 8 rows.
    pub fn terminal() -> Self {
        Self {
            bar_height: 1.0,
            top_margin: 1.0,
            default_open_height: 8.0,
        }
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self::preview_console()
    }
}

/// Drag gesture progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// Pointer pressed on the bar but not yet moved.
    Started,
    /// At least one movement has been applied.
    InProgress,
}

/// Change notification emitted by [`PanelState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    /// Height went from zero to positive.
    Opened {
        /// New height.
        height: f64,
    },
    /// Height went to zero.
    Closed,
    /// Height changed while staying open.
    Resized {
        /// New height.
        height: f64,
    },
    /// Drag phase changed.
    DragPhaseChanged(DragPhase),
}

/// Height state for the pull-up panel.
#[derive(Debug)]
pub struct PanelState {
    frame_height: f64,
    /// Restored by the next tap-open
    last_frame_height: f64,
    screen_height: f64,
    drag_phase: DragPhase,
    geometry: PanelGeometry,
    observers: Observers<PanelEvent>,
}

impl PanelState {
    /// Create a closed panel.
    pub fn new(geometry: PanelGeometry) -> Self {
        Self {
            frame_height: 0.0,
            last_frame_height: geometry.default_open_height,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            drag_phase: DragPhase::Idle,
            geometry,
            observers: Observers::new(),
        }
    }

    /// Current visible height; zero when closed.
    pub fn frame_height(&self) -> f64 {
        self.frame_height
    }

    /// Height the next tap-open restores.
    pub fn last_frame_height(&self) -> f64 {
        self.last_frame_height
    }

    /// Last screen height reported through `set_screen_height`.
    pub fn screen_height(&self) -> f64 {
        self.screen_height
    }

    /// Chrome dimensions the panel was built with.
    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    /// True while any part of the panel is visible.
    pub fn is_open(&self) -> bool {
        self.frame_height > 0.0
    }

    /// Current drag phase.
    pub fn drag_phase(&self) -> DragPhase {
        self.drag_phase
    }

    /// True while a drag is under way.
    pub fn is_dragging(&self) -> bool {
        self.drag_phase != DragPhase::Idle
    }

    /// Largest height the panel may take, never negative.
    pub fn max_height(&self) -> f64 {
        let max = self.screen_height - self.geometry.bar_height - self.geometry.top_margin;
        if max > 0.0 {
            max
        } else {
            0.0
        }
    }

    /// Toggle between closed and the last opened height.
    pub fn tap(&mut self) {
        if self.is_open() {
            self.last_frame_height = self.frame_height;
            self.set_frame_height(0.0);
        } else {
            self.set_frame_height(self.last_frame_height);
        }
    }

    /// Mark the start of a drag gesture.
    pub fn drag_begin(&mut self) {
        self.set_drag_phase(DragPhase::Started);
    }

    /// Apply one drag movement.
    ///
    /// Positive `delta` is downward movement and shrinks the panel. The new
    /// height is derived from the current, already clamped height, so dragging
    /// past either bound never builds up slack that has to be undone.
    pub fn drag_update(&mut self, delta: f64) {
        self.set_frame_height(self.frame_height - delta);
        self.set_drag_phase(DragPhase::InProgress);
    }

    /// Finish the drag. The dragged-to height stands.
    pub fn drag_end(&mut self) {
        self.set_drag_phase(DragPhase::Idle);
    }

    /// Record the measured screen extent.
    ///
    /// May be called repeatedly; the latest value wins and the current height
    /// is re-clamped against the new bound.
    pub fn set_screen_height(&mut self, screen_height: f64) {
        self.screen_height = screen_height;
        self.set_frame_height(self.frame_height);
    }

    /// Register a listener for [`PanelEvent`]s.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PanelEvent) + Send + 'static,
    {
        self.observers.subscribe(listener)
    }

    /// Remove a listener registered with [`Self::subscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn set_frame_height(&mut self, candidate: f64) {
        let height = clamp(candidate, 0.0, self.max_height());
        if height == self.frame_height {
            return;
        }

        let was_open = self.is_open();
        self.frame_height = height;

        let event = match (was_open, self.is_open()) {
            (false, true) => PanelEvent::Opened { height },
            (true, false) => PanelEvent::Closed,
            _ => PanelEvent::Resized { height },
        };
        tracing::trace!(?event, "panel height changed");
        self.observers.notify(&event);
    }

    fn set_drag_phase(&mut self, phase: DragPhase) {
        if self.drag_phase == phase {
            return;
        }
        self.drag_phase = phase;
        self.observers.notify(&PanelEvent::DragPhaseChanged(phase));
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(PanelGeometry::default())
    }
}

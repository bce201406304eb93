//! Console core state (pure).
//!
//! All state transitions are synchronous and testable without a terminal.

pub mod message_store;
pub mod panel;

// Re-export for convenience
pub use message_store::{MessageStore, StoreEvent, StoreProfile};
pub use panel::{DragPhase, PanelEvent, PanelGeometry, PanelState};

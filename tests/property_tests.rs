//! Property-based tests for store and panel invariants.
//!
//! Tests validate:
//! 1. The store never holds more than `capacity` entries and keeps the newest
//! 2. Whitespace-only text is never stored
//! 3. `clamp` always lands inside an ordered range
//! 4. The panel height stays within [0, max_height] under any input sequence

use proptest::prelude::*;
use pullup_console::geometry::clamp;
use pullup_console::model::Severity;
use pullup_console::state::{MessageStore, PanelGeometry, PanelState, StoreEvent};
use std::sync::{Arc, Mutex};

// ===== Strategies =====

/// Messages with a bias towards blank and whitespace-only text.
fn message_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9 ]{1,12}",
        1 => Just(String::new()),
        1 => "[ \t\n]{1,4}",
    ]
}

#[derive(Debug, Clone)]
enum PanelInput {
    Tap,
    DragBegin,
    DragUpdate(f64),
    DragEnd,
    Screen(f64),
}

fn panel_input() -> impl Strategy<Value = PanelInput> {
    prop_oneof![
        Just(PanelInput::Tap),
        Just(PanelInput::DragBegin),
        (-2000.0f64..2000.0).prop_map(PanelInput::DragUpdate),
        Just(PanelInput::DragEnd),
        (0.0f64..1500.0).prop_map(PanelInput::Screen),
    ]
}

// ===== Property 1: Capacity =====

proptest! {
    #[test]
    fn store_never_exceeds_capacity(
        capacity in 1usize..40,
        padding_seed in 0usize..40,
        texts in prop::collection::vec(message_text(), 0..120),
    ) {
        let padding = padding_seed % capacity;
        let mut store = MessageStore::with_padding(capacity, padding).unwrap();

        for text in &texts {
            store.append(text.as_str(), Severity::Debug);
            prop_assert!(store.len() <= capacity);
        }
    }

    #[test]
    fn store_keeps_newest_messages_in_order(
        capacity in 1usize..20,
        texts in prop::collection::vec("[a-z]{1,8}", 0..60),
    ) {
        let mut store = MessageStore::new(capacity).unwrap();
        for text in &texts {
            store.append(text.as_str(), Severity::Info);
        }

        let kept: Vec<&str> = store.entries().iter().map(|e| e.text()).collect();
        let skip = texts.len().saturating_sub(capacity);
        let expected: Vec<&str> = texts.iter().skip(skip).map(String::as_str).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn notifications_match_stored_appends(
        texts in prop::collection::vec(message_text(), 0..50),
    ) {
        let mut store = MessageStore::new(10).unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |event: &StoreEvent| {
            let StoreEvent::Appended(id) = *event;
            sink.lock().unwrap().push(id);
        });

        let mut returned = Vec::new();
        for text in &texts {
            if let Some(id) = store.append(text.as_str(), Severity::Debug) {
                returned.push(id);
            }
        }

        prop_assert_eq!(&*seen.lock().unwrap(), &returned);
    }
}

// ===== Property 2: Empty Drop =====

proptest! {
    #[test]
    fn whitespace_only_text_is_dropped(text in "[ \t\r\n]{0,10}") {
        let mut store = MessageStore::new(5).unwrap();

        prop_assert!(store.append(text.as_str(), Severity::Trace).is_none());
        prop_assert!(store.is_empty());
    }

    #[test]
    fn text_with_content_is_stored_verbatim(text in "[ ]{0,3}[a-z]{1,5}[ ]{0,3}") {
        let mut store = MessageStore::new(5).unwrap();

        prop_assert!(store.append(text.as_str(), Severity::Trace).is_some());
        prop_assert_eq!(store.entries()[0].text(), text.as_str());
    }
}

// ===== Property 3: Clamp =====

proptest! {
    #[test]
    fn clamp_lands_in_range(
        value in -1e6f64..1e6,
        low in -1e3f64..1e3,
        span in 0.0f64..1e3,
    ) {
        let high = low + span;
        let clamped = clamp(value, low, high);

        prop_assert!(low <= clamped && clamped <= high);
        if low <= value && value <= high {
            prop_assert_eq!(clamped, value);
        }
    }

    #[test]
    fn clamp_inverted_range_yields_low(value in -1e3f64..1e3, low in 1.0f64..1e3) {
        prop_assert_eq!(clamp(value, low, -low), low);
    }
}

// ===== Property 4: Panel Clamp =====

proptest! {
    #[test]
    fn panel_height_stays_within_bounds(
        inputs in prop::collection::vec(panel_input(), 0..80),
    ) {
        let mut panel = PanelState::new(PanelGeometry::preview_console());

        for input in inputs {
            match input {
                PanelInput::Tap => panel.tap(),
                PanelInput::DragBegin => panel.drag_begin(),
                PanelInput::DragUpdate(delta) => panel.drag_update(delta),
                PanelInput::DragEnd => panel.drag_end(),
                PanelInput::Screen(height) => panel.set_screen_height(height),
            }

            let height = panel.frame_height();
            prop_assert!(height >= 0.0, "height {} below zero", height);
            prop_assert!(
                height <= panel.max_height(),
                "height {} above max {}",
                height,
                panel.max_height()
            );
        }
    }

    #[test]
    fn drag_update_without_slack(first in 0.0f64..5000.0) {
        let mut panel = PanelState::new(PanelGeometry::preview_console());

        panel.drag_begin();
        panel.drag_update(-first);
        let after_up = panel.frame_height();
        panel.drag_update(10.0);

        let expected = (after_up - 10.0).max(0.0);
        prop_assert!((panel.frame_height() - expected).abs() < 1e-9);
    }
}

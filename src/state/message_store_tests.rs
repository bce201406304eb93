//! Tests for the message store.

#![cfg(test)]

use super::{MessageStore, StoreEvent, StoreProfile};
use crate::model::{EntryId, Severity, StoreError};
use std::sync::{Arc, Mutex};

/// Helper to collect notifications from a store
fn record_events(store: &mut MessageStore) -> Arc<Mutex<Vec<StoreEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    store.subscribe(move |event| sink.lock().unwrap().push(*event));
    events
}

fn texts(store: &MessageStore) -> Vec<&str> {
    store.entries().iter().map(|e| e.text()).collect()
}

#[test]
fn new_creates_empty_store() {
    let store = MessageStore::new(100).unwrap();

    assert!(store.is_empty());
    assert_eq!(store.capacity(), 100);
    assert_eq!(store.padding_count(), 0);
    assert_eq!(store.unread_count(), 0);
    assert!(store.is_enabled());
}

#[test]
fn new_rejects_zero_capacity() {
    let result = MessageStore::new(0);

    assert_eq!(
        result.unwrap_err(),
        StoreError::PaddingExceedsCapacity {
            padding: 0,
            capacity: 0
        }
    );
}

#[test]
fn with_padding_seeds_blank_entries() {
    let store = MessageStore::with_padding(10, 4).unwrap();

    assert_eq!(store.len(), 4);
    assert!(store.entries().iter().all(|e| e.is_padding()));
    assert!(store
        .entries()
        .iter()
        .all(|e| e.severity() == Severity::Debug));
    assert_eq!(store.unread_count(), 0, "placeholders are not unread");
}

#[test]
fn with_padding_rejects_padding_equal_to_capacity() {
    let result = MessageStore::with_padding(5, 5);

    assert!(matches!(
        result,
        Err(StoreError::PaddingExceedsCapacity {
            padding: 5,
            capacity: 5
        })
    ));
}

#[test]
fn with_padding_rejects_padding_above_capacity() {
    assert!(MessageStore::with_padding(3, 42).is_err());
}

#[test]
fn from_profile_uses_profile_values() {
    let console = MessageStore::from_profile(StoreProfile::PREVIEW_CONSOLE).unwrap();
    assert_eq!(console.capacity(), 4200);
    assert_eq!(console.len(), 42);

    let log = MessageStore::from_profile(StoreProfile::PREVIEW_LOG).unwrap();
    assert_eq!(log.capacity(), 200);
    assert!(log.is_empty());
}

#[test]
fn append_adds_entry_at_the_back() {
    let mut store = MessageStore::new(10).unwrap();

    store.append("first", Severity::Info);
    store.append("second", Severity::Trace);

    assert_eq!(texts(&store), vec!["first", "second"]);
    assert_eq!(store.entries()[0].severity(), Severity::Info);
    assert_eq!(store.entries()[1].severity(), Severity::Trace);
}

#[test]
fn append_returns_id_of_new_entry() {
    let mut store = MessageStore::new(10).unwrap();

    let id = store.append("hello", Severity::Debug);

    assert_eq!(id, store.latest_id());
    assert_eq!(id, Some(store.entries()[0].id()));
}

#[test]
fn append_evicts_oldest_when_over_capacity() {
    let mut store = MessageStore::new(3).unwrap();

    for text in ["first", "second", "third", "fourth"] {
        store.append(text, Severity::Debug);
    }

    assert_eq!(texts(&store), vec!["second", "third", "fourth"]);
}

#[test]
fn capacity_one_keeps_only_latest() {
    let mut store = MessageStore::new(1).unwrap();

    store.append("first", Severity::Debug);
    store.append("second", Severity::Debug);
    store.append("third", Severity::Debug);

    assert_eq!(texts(&store), vec!["third"]);
}

#[test]
fn padding_is_evicted_before_real_messages() {
    let mut store = MessageStore::with_padding(3, 2).unwrap();

    store.append("a", Severity::Debug);
    assert_eq!(texts(&store), vec!["", "", "a"]);

    store.append("b", Severity::Debug);
    assert_eq!(texts(&store), vec!["", "a", "b"]);

    store.append("c", Severity::Debug);
    assert_eq!(texts(&store), vec!["a", "b", "c"]);
}

#[test]
fn scenario_capacity_three_padding_one() {
    let mut store = MessageStore::with_padding(3, 1).unwrap();
    let events = record_events(&mut store);

    store.append("a", Severity::Debug);
    store.append("b", Severity::Debug);
    let c = store.append("c", Severity::Debug).unwrap();

    assert_eq!(texts(&store), vec!["a", "b", "c"]);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events.last(), Some(&StoreEvent::Appended(c)));
}

#[test]
fn append_empty_text_is_dropped() {
    let mut store = MessageStore::new(10).unwrap();
    let events = record_events(&mut store);

    assert_eq!(store.append("", Severity::Info), None);

    assert!(store.is_empty());
    assert!(events.lock().unwrap().is_empty());
    assert_eq!(store.unread_count(), 0);
}

#[test]
fn append_whitespace_only_text_is_dropped() {
    let mut store = MessageStore::with_padding(10, 2).unwrap();
    let events = record_events(&mut store);

    assert_eq!(store.append("   ", Severity::Debug), None);
    assert_eq!(store.append("\n\t ", Severity::Debug), None);

    assert_eq!(store.len(), 2);
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn append_keeps_surrounding_whitespace_of_real_text() {
    let mut store = MessageStore::new(10).unwrap();

    store.append("  indented", Severity::Debug);

    assert_eq!(store.entries()[0].text(), "  indented");
}

#[test]
fn append_notifies_with_new_entry_id() {
    let mut store = MessageStore::new(10).unwrap();
    let events = record_events(&mut store);

    let first = store.append("one", Severity::Debug).unwrap();
    let second = store.append("two", Severity::Debug).unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec![StoreEvent::Appended(first), StoreEvent::Appended(second)]
    );
}

#[test]
fn unsubscribed_listener_receives_nothing() {
    let mut store = MessageStore::new(10).unwrap();
    let events = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&events);
    let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

    store.append("before", Severity::Debug);
    assert!(store.unsubscribe(id));
    store.append("after", Severity::Debug);

    assert_eq!(*events.lock().unwrap(), 1);
}

#[test]
fn append_with_evaluates_text_when_enabled() {
    let mut store = MessageStore::new(10).unwrap();

    let id = store.append_with(Severity::Info, || format!("answer {}", 7 * 6));

    assert!(id.is_some());
    assert_eq!(store.entries()[0].text(), "answer 42");
}

#[test]
fn append_with_does_not_evaluate_text_when_disabled() {
    let mut store = MessageStore::new(10).unwrap();
    store.set_enabled(false);
    let mut evaluated = false;

    let id = store.append_with(Severity::Debug, || {
        evaluated = true;
        "expensive".to_string()
    });

    assert_eq!(id, None);
    assert!(!evaluated, "deferred text must not be evaluated");
    assert!(store.is_empty());
}

#[test]
fn append_with_empty_result_is_dropped() {
    let mut store = MessageStore::new(10).unwrap();

    assert_eq!(store.append_with(Severity::Debug, String::new), None);
    assert!(store.is_empty());
}

#[test]
fn disabled_store_drops_plain_appends() {
    let mut store = MessageStore::new(10).unwrap();
    store.set_enabled(false);

    assert_eq!(store.append("ignored", Severity::Info), None);
    assert!(store.is_empty());

    store.set_enabled(true);
    assert!(store.append("kept", Severity::Info).is_some());
    assert_eq!(store.len(), 1);
}

#[test]
fn unread_count_tracks_real_appends() {
    let mut store = MessageStore::with_padding(10, 3).unwrap();

    store.append("one", Severity::Debug);
    store.append("", Severity::Debug);
    store.append("two", Severity::Debug);

    assert_eq!(store.unread_count(), 2);
    assert!(store.has_unread());
}

#[test]
fn has_unread_does_not_change_state() {
    let mut store = MessageStore::new(10).unwrap();
    store.append("one", Severity::Debug);

    assert!(store.has_unread());
    assert!(store.has_unread());
    assert_eq!(store.unread_count(), 1);
}

#[test]
fn mark_read_resets_unread() {
    let mut store = MessageStore::new(10).unwrap();
    store.append("one", Severity::Debug);

    store.mark_read();

    assert!(!store.has_unread());
    store.append("two", Severity::Debug);
    assert_eq!(store.unread_count(), 1);
}

#[test]
fn unread_count_keeps_counting_past_capacity() {
    let mut store = MessageStore::new(2).unwrap();

    for i in 0..5 {
        store.append(format!("m{i}"), Severity::Debug);
    }

    assert_eq!(store.len(), 2);
    assert_eq!(store.unread_count(), 5);
}

#[test]
fn position_finds_live_entries() {
    let mut store = MessageStore::with_padding(5, 1).unwrap();
    let a = store.append("a", Severity::Debug).unwrap();
    let b = store.append("b", Severity::Debug).unwrap();

    assert_eq!(store.position(a), Some(1));
    assert_eq!(store.position(b), Some(2));
}

#[test]
fn position_of_evicted_entry_is_none() {
    let mut store = MessageStore::new(2).unwrap();
    let a = store.append("a", Severity::Debug).unwrap();
    store.append("b", Severity::Debug);
    store.append("c", Severity::Debug);

    assert_eq!(store.position(a), None);
}

#[test]
fn position_of_foreign_id_is_none() {
    let mut other = MessageStore::new(5).unwrap();
    let foreign: EntryId = other.append("elsewhere", Severity::Debug).unwrap();
    let store = MessageStore::new(5).unwrap();

    assert_eq!(store.position(foreign), None);
}

#[test]
fn latest_id_on_padded_store_is_last_placeholder() {
    let store = MessageStore::with_padding(5, 2).unwrap();

    assert_eq!(store.latest_id(), Some(store.entries()[1].id()));
}

//! Duplicate removal.

use std::collections::HashSet;

use crate::event::Event;

/// Drop events whose (time, name, impact) key was already seen, keeping the
/// first occurrence of each key in its original position.
pub fn dedup(events: &[Event]) -> Vec<Event> {
    let mut seen = HashSet::new();
    let mut deduped = Vec::with_capacity(events.len());

    for event in events {
        if seen.insert(event.key()) {
            deduped.push(event.clone());
        }
    }

    deduped
}

//! Grouping of sweep events into x-sharing slices (component C3).

use crate::events::Event;

/// All events sharing a single x coordinate, in the order
/// [`crate::events::generate_events`] produced them (already sorted by
/// `(x, y)`, so by `y` within the slice).
pub struct Slice {
    pub x: i32,
    pub events: Vec<Event>,
}

pub fn build_slices(events: Vec<Event>) -> Vec<Slice> {
    let mut slices: Vec<Slice> = Vec::new();
    for event in events {
        match slices.last_mut() {
            Some(slice) if slice.x == event.point.x => slice.events.push(event),
            _ => slices.push(Slice { x: event.point.x, events: vec![event] }),
        }
    }
    slices
}

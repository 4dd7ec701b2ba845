//! Sweep-event generation from obstacle polygons (component C2).

use crate::error::{InvalidPolygonError, PlanError};
use crate::geometry::Polygon;
use crate::math::{point_order, Point};

/// The role a vertex plays in the sweep. `Ceiling`/`Floor` name the
/// cell edge the vertex will extend, not the vertex's own position on
/// the obstacle: an obstacle's lower chain becomes the *ceiling* of the
/// cell below it, and its upper chain becomes the *floor* of the cell
/// above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    In,
    Out,
    Ceiling,
    Floor,
}

/// Sentinel obstacle id used for the synthetic workspace-boundary
/// events a slice is padded with before processing.
pub const BOUNDARY: usize = usize::MAX;

#[derive(Debug, Clone)]
pub struct Event {
    pub obstacle_id: usize,
    pub point: Point,
    pub kind: EventKind,
    /// Position of this event within its slice's padded event list,
    /// assigned once the slice is built (see `decomposition::process_slice`).
    pub original_index_in_slice: usize,
    /// Set once an IN/OUT operation has consumed this event as one of
    /// its boundary neighbors, so the CEILING/FLOOR pass skips it.
    pub used: bool,
}

impl Event {
    pub fn new(obstacle_id: usize, point: Point, kind: EventKind) -> Self {
        Event {
            obstacle_id,
            point,
            kind,
            original_index_in_slice: 0,
            used: false,
        }
    }
}

/// Classifies every vertex of every obstacle into IN/OUT/CEILING/FLOOR
/// events and returns them sorted by `(x, y)`.
pub fn generate_events(obstacles: &[Polygon]) -> Result<Vec<Event>, PlanError> {
    let mut events = Vec::new();

    for (obstacle_id, polygon) in obstacles.iter().enumerate() {
        polygon
            .validate()
            .map_err(|reason| InvalidPolygonError { obstacle_index: obstacle_id, reason })?;

        let l = polygon.leftmost_index();
        let r = polygon.rightmost_index();
        events.push(Event::new(obstacle_id, polygon.vertices[l], EventKind::In));
        events.push(Event::new(obstacle_id, polygon.vertices[r], EventKind::Out));

        let n = polygon.len();
        for m in 0..n {
            if m == l || m == r {
                continue;
            }
            let kind = if l < r {
                if l < m && m < r {
                    EventKind::Ceiling
                } else {
                    EventKind::Floor
                }
            } else if r < m && m < l {
                EventKind::Floor
            } else {
                EventKind::Ceiling
            };
            events.push(Event::new(obstacle_id, polygon.vertices[m], kind));
        }
    }

    events.sort_by(|a, b| point_order(a.point, b.point));
    Ok(events)
}

/// Orders a (padded) slice's events for processing: IN/OUT events
/// first, sorted by `y` among themselves, followed by the remaining
/// CEILING/FLOOR/boundary events in their original relative order.
/// Processing IN/OUT first is what makes [`BOUNDARY`]-padded
/// CEILING/FLOOR events resolvable by a simple prefix count over
/// already-settled events.
pub fn build_in_out_first_order(events: &[Event]) -> Vec<usize> {
    let mut in_out: Vec<usize> = (0..events.len())
        .filter(|&i| matches!(events[i].kind, EventKind::In | EventKind::Out))
        .collect();
    in_out.sort_by_key(|&i| events[i].point.y);

    let rest = (0..events.len()).filter(|&i| !matches!(events[i].kind, EventKind::In | EventKind::Out));

    in_out.into_iter().chain(rest).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn diamond_events_classified_and_ordered() {
        let diamond = Polygon::new(vec![point(5, 7), point(7, 5), point(5, 3), point(3, 5)]);
        let events = generate_events(&[diamond]).unwrap();
        let kinds: Vec<(EventKind, Point)> = events.iter().map(|e| (e.kind, e.point)).collect();
        assert_eq!(
            kinds,
            vec![
                (EventKind::In, point(3, 5)),
                (EventKind::Floor, point(5, 3)),
                (EventKind::Ceiling, point(5, 7)),
                (EventKind::Out, point(7, 5)),
            ]
        );
    }

    #[test]
    fn invalid_polygon_is_reported_with_its_index() {
        let ok = Polygon::new(vec![point(5, 7), point(7, 5), point(5, 3), point(3, 5)]);
        let bad = Polygon::new(vec![point(0, 0), point(1, 1)]);
        let err = generate_events(&[ok, bad]).unwrap_err();
        match err {
            PlanError::InvalidPolygon(e) => assert_eq!(e.obstacle_index, 1),
            other => panic!("expected InvalidPolygon, got {:?}", other),
        }
    }
}

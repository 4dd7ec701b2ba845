//! The sweep-line decomposition engine (component C4).
//!
//! `Planner` owns every buffer the sweep touches so repeated calls to
//! [`Planner::plan`] reuse their allocations instead of rebuilding the
//! cell arena and active list from scratch each time, the same
//! buffer-reuse idiom the monotone-decomposition context in this
//! workspace uses for its sweep status and helper map.

use std::collections::HashMap;

use crate::cell::Cell;
use crate::error::{DecompositionError, DecompositionReason, PlanError};
use crate::events::{build_in_out_first_order, generate_events, Event, EventKind, BOUNDARY};
use crate::geometry::{Polygon, Workspace};
use crate::math::{point, Point};
use crate::slices::{build_slices, Slice};
use crate::{coverage, walk};

/// The result of a full plan: the cell graph, a DFS visitation order
/// starting from the requested cell, and a serpentine coverage path
/// per cell.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResult {
    pub cell_graph: Vec<Cell>,
    pub visitation_order: Vec<usize>,
    pub coverage_paths: HashMap<usize, Vec<Point>>,
}

/// Owns the cell arena and the currently-open (active) cell list for a
/// single sweep. Reused across calls to [`Planner::plan`].
pub struct Planner {
    cells: Vec<Cell>,
    active: Vec<usize>,
}

impl Planner {
    pub fn new() -> Self {
        Planner { cells: Vec::new(), active: Vec::new() }
    }

    /// Runs the full pipeline: event generation, decomposition, graph
    /// walk and per-cell coverage planning.
    pub fn plan(
        &mut self,
        workspace: Workspace,
        obstacles: &[Polygon],
        start_cell: usize,
        robot_radius: i32,
    ) -> Result<PlanResult, PlanError> {
        self.cells.clear();
        self.active.clear();

        let events = generate_events(obstacles)?;
        let slices = build_slices(events);
        self.decompose(&workspace, slices)?;

        let visitation_order = walk::visitation_order(&mut self.cells, start_cell);

        let mut coverage_paths = HashMap::with_capacity(self.cells.len());
        for cell in &self.cells {
            coverage_paths.insert(
                cell.index,
                coverage::boustrophedon_path(&cell.ceiling, &cell.floor, robot_radius),
            );
        }

        Ok(PlanResult { cell_graph: self.cells.clone(), visitation_order, coverage_paths })
    }

    fn connect(&mut self, a: usize, b: usize) {
        self.cells[a].neighbors.push(b);
        self.cells[b].neighbors.push(a);
    }

    fn decompose(&mut self, workspace: &Workspace, slices: Vec<Slice>) -> Result<(), PlanError> {
        if slices.is_empty() {
            let mut cell = Cell::new(0);
            for i in 0..workspace.width {
                cell.ceiling.push(point(i, 0));
                cell.floor.push(point(i, workspace.height - 1));
            }
            self.cells.push(cell);
            return Ok(());
        }

        let first_x = slices[0].x;
        let mut cell0 = Cell::new(0);
        for i in 0..first_x {
            cell0.ceiling.push(point(i, 0));
            cell0.floor.push(point(i, workspace.height - 1));
        }
        self.cells.push(cell0);
        self.active = vec![0];

        let last_x = slices.last().expect("checked non-empty above").x;
        for mut slice in slices {
            self.process_slice(workspace, &mut slice)?;
        }

        if self.active.len() == 1 {
            let idx = self.active[0];
            for i in (last_x + 1)..workspace.width {
                self.cells[idx].ceiling.push(point(i, 0));
                self.cells[idx].floor.push(point(i, workspace.height - 1));
            }
        }
        Ok(())
    }

    fn process_slice(&mut self, workspace: &Workspace, slice: &mut Slice) -> Result<(), PlanError> {
        let x = slice.x;
        let mut events = Vec::with_capacity(slice.events.len() + 2);
        events.push(Event::new(BOUNDARY, point(x, 0), EventKind::Ceiling));
        events.append(&mut slice.events);
        events.push(Event::new(BOUNDARY, point(x, workspace.height - 1), EventKind::Floor));
        for (i, event) in events.iter_mut().enumerate() {
            event.original_index_in_slice = i;
        }

        let order = build_in_out_first_order(&events);
        for i in order {
            if events[i].used {
                continue;
            }
            match events[i].kind {
                EventKind::In => self.handle_in(&mut events, i)?,
                EventKind::Out => self.handle_out(&mut events, i)?,
                EventKind::Ceiling => self.handle_ceiling(&events, i),
                EventKind::Floor => self.handle_floor(&events, i),
            }
        }
        Ok(())
    }

    fn handle_in(&mut self, events: &mut [Event], i: usize) -> Result<(), PlanError> {
        let e = events[i].point;
        let c = events[i - 1].point;
        let f = events[i + 1].point;
        let y = e.y;

        let found = self
            .active
            .iter()
            .position(|&idx| {
                let cell = &self.cells[idx];
                cell.ceiling.last().map_or(false, |c| c.y < y)
                    && cell.floor.last().map_or(false, |f| y < f.y)
            })
            .ok_or(DecompositionError { reason: DecompositionReason::NoContainingCell, x: e.x, y })?;
        let a_idx = self.active[found];

        let t_idx = self.cells.len();
        let b_idx = t_idx + 1;
        let mut top = Cell::new(t_idx);
        top.ceiling.push(c);
        top.floor.push(e);
        let mut bottom = Cell::new(b_idx);
        bottom.ceiling.push(e);
        bottom.floor.push(f);
        self.cells.push(top);
        self.cells.push(bottom);

        self.connect(t_idx, a_idx);
        self.connect(b_idx, a_idx);
        self.active.splice(found..=found, [t_idx, b_idx]);

        events[i].used = true;
        events[i - 1].used = true;
        events[i + 1].used = true;
        Ok(())
    }

    fn handle_out(&mut self, events: &mut [Event], i: usize) -> Result<(), PlanError> {
        let e = events[i].point;
        let c = events[i - 1].point;
        let f = events[i + 1].point;
        let y = e.y;

        let found = (1..self.active.len())
            .find(|&pos| {
                let top = &self.cells[self.active[pos - 1]];
                let bottom = &self.cells[self.active[pos]];
                top.ceiling.last().map_or(false, |c| c.y < y)
                    && bottom.floor.last().map_or(false, |f| y < f.y)
            })
            .ok_or(DecompositionError { reason: DecompositionReason::NoAdjacentPair, x: e.x, y })?;

        let top_idx = self.active[found - 1];
        let bottom_idx = self.active[found];

        let n_idx = self.cells.len();
        let mut merged = Cell::new(n_idx);
        merged.ceiling.push(c);
        merged.floor.push(f);
        self.cells.push(merged);

        self.connect(n_idx, top_idx);
        self.connect(n_idx, bottom_idx);
        self.active.splice((found - 1)..=found, [n_idx]);

        events[i].used = true;
        events[i - 1].used = true;
        events[i + 1].used = true;
        Ok(())
    }

    fn handle_ceiling(&mut self, events: &[Event], i: usize) {
        if events[i].used {
            return;
        }
        let k = count_in_or_floor_prefix(events, i);
        let cell_idx = self.active[k];
        self.cells[cell_idx].ceiling.push(events[i].point);
    }

    fn handle_floor(&mut self, events: &[Event], i: usize) {
        if events[i].used {
            return;
        }
        let k = count_in_or_floor_prefix(events, i);
        let cell_idx = self.active[k];
        self.cells[cell_idx].floor.push(events[i].point);
    }
}

impl Default for Planner {
    fn default() -> Self {
        Planner::new()
    }
}

/// Counts IN and FLOOR events preceding index `i` in a slice's padded
/// event list. Valid only because IN/OUT events in this slice have
/// already been fully processed (and marked `used`) before any
/// CEILING/FLOOR event is handled: the active list is already in its
/// post-IN/OUT-for-this-slice shape, so this prefix count is a stable
/// index into it.
fn count_in_or_floor_prefix(events: &[Event], i: usize) -> usize {
    events[..i]
        .iter()
        .filter(|e| matches!(e.kind, EventKind::In | EventKind::Floor))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn empty_workspace_is_one_cell() {
        let mut planner = Planner::new();
        let result = planner.plan(Workspace::new(10, 10), &[], 0, 0).unwrap();
        assert_eq!(result.cell_graph.len(), 1);
        assert_eq!(result.cell_graph[0].ceiling.first(), Some(&point(0, 0)));
        assert_eq!(result.cell_graph[0].ceiling.last(), Some(&point(9, 0)));
        assert_eq!(result.cell_graph[0].floor.last(), Some(&point(9, 9)));
        assert!(result.cell_graph[0].neighbors.is_empty());
        assert_eq!(result.visitation_order, vec![0]);
    }

    #[test]
    fn single_diamond_makes_four_cells_with_expected_adjacency() {
        let diamond = Polygon::new(vec![point(5, 7), point(7, 5), point(5, 3), point(3, 5)]);
        let mut planner = Planner::new();
        let result = planner.plan(Workspace::new(10, 10), &[diamond], 0, 0).unwrap();

        assert_eq!(result.cell_graph.len(), 4);
        let left = &result.cell_graph[0];
        let top = &result.cell_graph[1];
        let bottom = &result.cell_graph[2];
        let right = &result.cell_graph[3];

        assert_eq!(left.ceiling, vec![point(0, 0), point(1, 0), point(2, 0)]);
        assert_eq!(left.floor, vec![point(0, 9), point(1, 9), point(2, 9)]);
        assert_eq!(left.neighbors, vec![1, 2]);

        assert_eq!(top.ceiling, vec![point(3, 0), point(5, 0)]);
        assert_eq!(top.floor, vec![point(3, 5), point(5, 3)]);
        assert_eq!(top.neighbors, vec![0, 3]);

        assert_eq!(bottom.ceiling, vec![point(3, 5), point(5, 7)]);
        assert_eq!(bottom.floor, vec![point(3, 9), point(5, 9)]);
        assert_eq!(bottom.neighbors, vec![0, 3]);

        assert_eq!(right.ceiling, vec![point(7, 0), point(8, 0), point(9, 0)]);
        assert_eq!(right.floor, vec![point(7, 9), point(8, 9), point(9, 9)]);
        assert_eq!(right.neighbors, vec![1, 2]);

        assert_eq!(result.visitation_order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn two_disjoint_diamonds_stay_connected_and_fully_visited() {
        // Two same-shaped diamonds placed so their x-ranges don't
        // overlap, to check the basic open/close/visit machinery
        // without interleaving the two obstacles' events.
        let d1 = Polygon::new(vec![point(100, 150), point(150, 100), point(100, 50), point(50, 100)]);
        let d2 = Polygon::new(vec![point(300, 350), point(350, 300), point(300, 250), point(250, 300)]);
        let mut planner = Planner::new();
        let result = planner.plan(Workspace::new(400, 400), &[d1, d2], 0, 0).unwrap();

        assert_eq!(result.cell_graph.len(), 7);

        // Every cell is reachable from cell 0, and the adjacency
        // relation is symmetric.
        let mut seen: Vec<bool> = vec![false; result.cell_graph.len()];
        for &idx in &result.visitation_order {
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&v| v));

        for cell in &result.cell_graph {
            for &n in &cell.neighbors {
                assert!(result.cell_graph[n].neighbors.contains(&cell.index));
            }
            assert_eq!(cell.ceiling.len(), cell.floor.len());
        }
    }

    #[test]
    fn robot_radius_zero_still_terminates_and_reaches_far_edge() {
        // A coverage path must still be produced when robot_radius is 0.
        let diamond = Polygon::new(vec![point(5, 7), point(7, 5), point(5, 3), point(3, 5)]);
        let mut planner = Planner::new();
        let result = planner.plan(Workspace::new(10, 10), &[diamond], 0, 0).unwrap();
        let right_path = &result.coverage_paths[&3];
        assert!(!right_path.is_empty());
    }

    #[test]
    fn obstacle_touching_left_boundary_is_a_decomposition_error_not_a_panic() {
        // Leftmost vertex at x == 0 leaves cell 0's ceiling/floor empty,
        // so the IN event's containing-cell lookup must fail cleanly
        // rather than index into an empty edge.
        let triangle = Polygon::new(vec![point(0, 5), point(3, 8), point(6, 2)]);
        let mut planner = Planner::new();
        let err = planner
            .plan(Workspace::new(10, 10), &[triangle], 0, 0)
            .unwrap_err();
        match err {
            PlanError::Decomposition(e) => {
                assert_eq!(e.reason, DecompositionReason::NoContainingCell);
            }
            other => panic!("expected Decomposition error, got {:?}", other),
        }
    }
}

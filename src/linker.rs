//! 8-connected grid bridging between two arbitrary points (component C7).
//!
//! `Linker` is independent of the cellular decomposition: it operates
//! directly on an occupancy grid supplied by the caller. Building that
//! grid from obstacle geometry (rasterizing line segments into cells)
//! is the caller's concern, not this crate's.

use std::collections::VecDeque;

use crate::error::{PlanError, UnreachableError};
use crate::geometry::Workspace;
use crate::math::{point, Point};

/// A free/blocked grid the same size as the workspace.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl OccupancyGrid {
    /// An all-free grid of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        OccupancyGrid { width, height, blocked: vec![false; (width * height) as usize] }
    }

    pub fn from_blocked(width: i32, height: i32, blocked: Vec<bool>) -> Self {
        assert_eq!(blocked.len(), (width * height) as usize);
        OccupancyGrid { width, height, blocked }
    }

    pub fn set_blocked(&mut self, p: Point, blocked: bool) {
        let idx = (p.y * self.width + p.x) as usize;
        self.blocked[idx] = blocked;
    }

    pub fn is_free(&self, p: Point) -> bool {
        p.x >= 0
            && p.y >= 0
            && p.x < self.width
            && p.y < self.height
            && !self.blocked[(p.y * self.width + p.x) as usize]
    }
}

#[derive(Debug, Clone, Copy)]
struct CostEntry {
    cost: u32,
    prev: Option<Point>,
    computed: bool,
}

impl Default for CostEntry {
    fn default() -> Self {
        CostEntry { cost: 0, prev: None, computed: false }
    }
}

/// Builds an 8-connected BFS cost map from a start point and
/// reconstructs shortest paths to any point it reached.
pub struct Linker {
    workspace: Workspace,
    occupancy: OccupancyGrid,
    cost: Vec<CostEntry>,
}

impl Linker {
    pub fn new(workspace: Workspace, occupancy: OccupancyGrid) -> Self {
        let size = (workspace.width * workspace.height) as usize;
        Linker { workspace, occupancy, cost: vec![CostEntry::default(); size] }
    }

    fn index(&self, p: Point) -> usize {
        (p.y * self.workspace.width + p.x) as usize
    }

    fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.workspace.width && p.y < self.workspace.height
    }

    /// Recomputes the cost map rooted at `start`, discarding any
    /// previous map. Cheap buffer reuse: the backing `Vec` is cleared
    /// in place rather than reallocated.
    pub fn build_cost_map(&mut self, start: Point) {
        for entry in &mut self.cost {
            *entry = CostEntry::default();
        }

        let mut queue = VecDeque::new();
        let start_idx = self.index(start);
        self.cost[start_idx].computed = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let current_cost = self.cost[self.index(current)].cost;
            for neighbor in neighbors8(current) {
                if !self.in_bounds(neighbor) || !self.occupancy.is_free(neighbor) {
                    continue;
                }
                let idx = self.index(neighbor);
                if !self.cost[idx].computed {
                    self.cost[idx] = CostEntry { cost: current_cost + 1, prev: Some(current), computed: true };
                    queue.push_back(neighbor);
                }
            }
        }
    }

    /// Reconstructs the shortest path from the point last passed to
    /// [`Linker::build_cost_map`] to `end`, by following `prev` pointers
    /// back from `end` and stopping on exact identity with `start`.
    pub fn find_linking_path(&self, start: Point, end: Point) -> Result<Vec<Point>, PlanError> {
        let end_idx = self.index(end);
        if !self.cost[end_idx].computed {
            return Err(UnreachableError { start, end }.into());
        }

        let mut path = vec![end];
        let mut current = end;
        while current != start {
            match self.cost[self.index(current)].prev {
                Some(prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => return Err(UnreachableError { start, end }.into()),
            }
        }
        path.reverse();
        Ok(path)
    }
}

fn neighbors8(p: Point) -> [Point; 8] {
    [
        point(p.x - 1, p.y - 1),
        point(p.x, p.y - 1),
        point(p.x + 1, p.y - 1),
        point(p.x - 1, p.y),
        point(p.x + 1, p.y),
        point(p.x - 1, p.y + 1),
        point(p.x, p.y + 1),
        point(p.x + 1, p.y + 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_8_connected_step(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1 && a != b
    }

    #[test]
    fn empty_workspace_links_diagonal_points_in_chebyshev_distance() {
        let ws = Workspace::new(10, 10);
        let mut linker = Linker::new(ws, OccupancyGrid::new(10, 10));
        let start = point(0, 0);
        let end = point(5, 5);
        linker.build_cost_map(start);
        let path = linker.find_linking_path(start, end).unwrap();

        assert_eq!(path.len(), 6);
        assert_eq!(path[0], start);
        assert_eq!(*path.last().unwrap(), end);
        for pair in path.windows(2) {
            assert!(is_8_connected_step(pair[0], pair[1]));
        }
    }

    #[test]
    fn a_wall_with_a_gap_forces_a_detour() {
        let ws = Workspace::new(10, 10);
        let mut occupancy = OccupancyGrid::new(10, 10);
        for y in 0..9 {
            occupancy.set_blocked(point(5, y), true);
        }
        // (5, 9) is left open as the only gap in the wall.

        let mut linker = Linker::new(ws, occupancy);
        let start = point(2, 2);
        let end = point(8, 2);
        linker.build_cost_map(start);
        let path = linker.find_linking_path(start, end).unwrap();

        assert_eq!(path[0], start);
        assert_eq!(*path.last().unwrap(), end);
        for pair in path.windows(2) {
            assert!(is_8_connected_step(pair[0], pair[1]));
        }
        assert!(path.iter().any(|&p| p.x == 5 && p.y == 9));
    }

    #[test]
    fn fully_enclosed_target_is_unreachable() {
        let ws = Workspace::new(5, 5);
        let mut occupancy = OccupancyGrid::new(5, 5);
        for x in 1..4 {
            occupancy.set_blocked(point(x, 1), true);
            occupancy.set_blocked(point(x, 3), true);
        }
        for y in 1..4 {
            occupancy.set_blocked(point(1, y), true);
            occupancy.set_blocked(point(3, y), true);
        }
        let mut linker = Linker::new(ws, occupancy);
        let start = point(0, 0);
        let end = point(2, 2);
        linker.build_cost_map(start);
        assert!(linker.find_linking_path(start, end).is_err());
    }
}

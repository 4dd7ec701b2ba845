//! Cells produced by the decomposition engine and their adjacency graph.

use crate::geometry::Edge;

/// A vertically-convex free-space cell. Cells are appended to the
/// planner's arena as they are created and are never removed, even
/// once an OPEN/CLOSE operation has superseded them with new cells:
/// earlier cells stay reachable as graph nodes so the adjacency
/// structure and visitation order remain well defined.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub index: usize,
    pub ceiling: Edge,
    pub floor: Edge,
    /// Indices of adjacent cells, in the order adjacency was recorded.
    pub neighbors: Vec<usize>,
    pub visited: bool,
    /// Set once this cell's coverage path has been consumed.
    pub cleaned: bool,
    /// Backtracking pointer used by the graph walker.
    pub parent: Option<usize>,
}

impl Cell {
    pub fn new(index: usize) -> Self {
        Cell {
            index,
            ceiling: Vec::new(),
            floor: Vec::new(),
            neighbors: Vec::new(),
            visited: false,
            cleaned: false,
            parent: None,
        }
    }
}

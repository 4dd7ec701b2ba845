//! Boustrophedon cellular decomposition (BCD) full-coverage path
//! planning for 2D polygonal workspaces.
//!
//! A workspace rectangle containing convex polygonal obstacles is
//! swept left to right. The sweep splits and merges free space into
//! vertically-convex cells (component C4), links them into an
//! adjacency graph, walks that graph depth-first from a chosen start
//! cell (C5), and lays a serpentine coverage path across each cell's
//! interior (C6). A separate, decomposition-independent utility links
//! two arbitrary points through an occupancy grid with an 8-connected
//! BFS (C7).
//!
//! ```
//! use bcd_planner::{plan, Polygon, Workspace};
//! use bcd_planner::math::point;
//!
//! let workspace = Workspace::new(10, 10);
//! let diamond = Polygon::new(vec![point(5, 7), point(7, 5), point(5, 3), point(3, 5)]);
//! let result = plan(workspace, &[diamond], 0, 0).unwrap();
//! assert_eq!(result.cell_graph.len(), 4);
//! ```

pub mod math;

mod cell;
mod coverage;
mod decomposition;
mod error;
mod events;
mod geometry;
mod linker;
mod slices;
mod walk;

pub use cell::Cell;
pub use decomposition::{Planner, PlanResult};
pub use error::{
    DecompositionError, DecompositionReason, InvalidPolygonError, PlanError, UnreachableError,
};
pub use events::{Event, EventKind};
pub use geometry::{Edge, InvalidPolygonReason, Polygon, Workspace};
pub use linker::{Linker, OccupancyGrid};

use math::Point;

/// Runs the full decomposition/visitation/coverage pipeline once,
/// without keeping a [`Planner`] around for reuse. Prefer [`Planner`]
/// directly when planning repeatedly, to reuse its internal buffers.
pub fn plan(
    workspace: Workspace,
    obstacles: &[Polygon],
    start_cell: usize,
    robot_radius: i32,
) -> Result<PlanResult, PlanError> {
    Planner::new().plan(workspace, obstacles, start_cell, robot_radius)
}

/// Links two arbitrary points through `occupancy` with an 8-connected
/// shortest path, independent of any cellular decomposition.
pub fn link(
    workspace: Workspace,
    occupancy: OccupancyGrid,
    start: Point,
    end: Point,
) -> Result<Vec<Point>, PlanError> {
    let mut linker = Linker::new(workspace, occupancy);
    linker.build_cost_map(start);
    linker.find_linking_path(start, end)
}

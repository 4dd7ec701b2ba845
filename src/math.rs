//! Integer 2D geometry types shared by every module.
//!
//! The workspace and its obstacles live on a discrete pixel grid, so the
//! planner works in `i32` coordinates throughout rather than the `f32`
//! curves used by path-tessellation code. `euclid` still does the useful
//! work (arithmetic, `Eq`/`Ord`-friendly tuples via `(x, y)`), we just
//! instantiate it at a different scalar type.

use std::cmp::Ordering;

/// A point on the workspace grid.
pub type Point = euclid::default::Point2D<i32>;

/// Shorthand for `Point::new(x, y)`.
pub fn point(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Total order over points used to find extrema and to sort sweep events:
/// smaller `x` first, `y` breaks ties.
pub fn point_order(a: Point, b: Point) -> Ordering {
    (a.x, a.y).cmp(&(b.x, b.y))
}

//! Error types for the planner's public entry points.
//!
//! Plain enums with hand-written `Display`/`Error` impls, following the
//! style used throughout the geometry/tessellation crates in this
//! workspace rather than a derive-macro crate.

use std::fmt;

use crate::geometry::InvalidPolygonReason;
use crate::math::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct InvalidPolygonError {
    pub obstacle_index: usize,
    pub reason: InvalidPolygonReason,
}

impl fmt::Display for InvalidPolygonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "obstacle {} is not a valid convex polygon: {:?}",
            self.obstacle_index, self.reason
        )
    }
}

impl std::error::Error for InvalidPolygonError {}

/// Why the sweep could not continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum DecompositionReason {
    /// An IN event's y coordinate did not fall strictly inside any
    /// currently open cell.
    NoContainingCell,
    /// An OUT event's y coordinate did not fall between an adjacent
    /// pair of currently open cells.
    NoAdjacentPair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct DecompositionError {
    pub reason: DecompositionReason,
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for DecompositionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "decomposition failed at ({}, {}): {:?}",
            self.x, self.y, self.reason
        )
    }
}

impl std::error::Error for DecompositionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct UnreachableError {
    pub start: Point,
    pub end: Point,
}

impl fmt::Display for UnreachableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "no free-space path links ({}, {}) to ({}, {})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

impl std::error::Error for UnreachableError {}

/// Top-level error for [`crate::plan`] and [`crate::link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanError {
    InvalidPolygon(InvalidPolygonError),
    Decomposition(DecompositionError),
    Unreachable(UnreachableError),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlanError::InvalidPolygon(e) => e.fmt(f),
            PlanError::Decomposition(e) => e.fmt(f),
            PlanError::Unreachable(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for PlanError {}

impl From<InvalidPolygonError> for PlanError {
    fn from(e: InvalidPolygonError) -> Self {
        PlanError::InvalidPolygon(e)
    }
}

impl From<DecompositionError> for PlanError {
    fn from(e: DecompositionError) -> Self {
        PlanError::Decomposition(e)
    }
}

impl From<UnreachableError> for PlanError {
    fn from(e: UnreachableError) -> Self {
        PlanError::Unreachable(e)
    }
}

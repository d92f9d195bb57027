//! Spatial partitioning for the broad phase.

pub mod grid;

pub use grid::{GridNode, SpatialGrid};

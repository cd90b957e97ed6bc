//! Wave function collapse over a square grid of edge-labelled tiles
//!
//! Builds a catalog of tile variants from hand-authored edge labels, derives
//! which variants may sit next to each other, and repeatedly collapses the
//! lowest-entropy cell while propagating the consequences until the grid is
//! decided.

#![forbid(unsafe_code)]

/// Core algorithm implementation including cell selection, collapse, and constraint propagation
pub mod algorithm;
/// Tile variant catalog and adjacency preprocessing
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Spatial grid management and direction arithmetic
pub mod spatial;

pub use io::error::{GenerationError, Result};

//! Spatial data structures for the generation grid
//!
//! This module contains spatial-related functionality including:
//! - Cardinal directions and edge-slot ordering
//! - Grid state, index math, and neighbor lookup

/// Cardinal directions shared by tile edges and grid steps
pub mod direction;
/// Grid state management and cell queries
pub mod grid;

pub use grid::Grid;

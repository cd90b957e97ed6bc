//! Tile catalog construction and adjacency preprocessing

/// Per-variant, per-direction compatibility tables
pub mod adjacency;
/// Base tile definitions, rotation, and catalog building
pub mod variants;

//! Input/output operations for assets, rendering, and the command line

/// Tile asset loading with one-time scaling and rotation
pub mod assets;
/// Command-line interface and run orchestration
pub mod cli;
/// Algorithm constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Grid rendering and PNG export
pub mod image;
/// Progress reporting for generation runs
pub mod progress;
/// Collapse-order capture and GIF export
pub mod visualization;

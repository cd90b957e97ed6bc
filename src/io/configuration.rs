//! Algorithm constants and runtime configuration defaults

// Default values for configurable parameters
/// Default side length of the square output grid in cells
pub const DEFAULT_GRID_DIMENSION: usize = 25;

/// Default rendered size of one tile in pixels
pub const DEFAULT_TILE_PIXELS: u32 = 15;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1_000;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

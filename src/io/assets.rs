//! Tile asset loading with one-time scaling and rotation
//!
//! Assets are numbered `0.png` upward in a single directory. Each bitmap is
//! converted to RGBA, scaled to the configured tile size once, and rotated
//! into all four orientations once, so rendering reduces to blitting.

use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::catalog::variants::BASE_TILE_COUNT;
use crate::io::error::{GenerationError, Result};

/// Pre-scaled, pre-rotated bitmaps for the base tile set
pub struct TileAssets {
    frames: Vec<[RgbaImage; 4]>,
    tile_pixels: u32,
}

impl TileAssets {
    /// Load numbered tile images from a directory
    ///
    /// Probes `0.png` upward through the base tile range and stops at the
    /// first missing file, so the loaded set is always a dense prefix and
    /// asset indices stay aligned with the edge table. A short prefix
    /// surfaces later as the catalog's missing-assets error. Present files
    /// are scaled with nearest-neighbor filtering (the tiles are pixel
    /// art) and pre-rotated clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::FileSystem`] when `dir` is not a
    /// directory and [`GenerationError::AssetLoad`] when a file exists but
    /// cannot be decoded.
    pub fn load_from_dir(dir: &Path, tile_pixels: u32) -> Result<Self> {
        if !dir.is_dir() {
            return Err(GenerationError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read tile directory",
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            });
        }

        let mut frames = Vec::with_capacity(BASE_TILE_COUNT);
        for index in 0..BASE_TILE_COUNT {
            let path = dir.join(format!("{index}.png"));
            if !path.exists() {
                break;
            }
            let img = image::open(&path).map_err(|e| GenerationError::AssetLoad {
                path: path.clone(),
                source: e,
            })?;
            let scaled = imageops::resize(
                &img.to_rgba8(),
                tile_pixels,
                tile_pixels,
                FilterType::Nearest,
            );
            let quarter = imageops::rotate90(&scaled);
            let half = imageops::rotate180(&scaled);
            let three_quarter = imageops::rotate270(&scaled);
            frames.push([scaled, quarter, half, three_quarter]);
        }

        Ok(Self {
            frames,
            tile_pixels,
        })
    }

    /// Number of base tiles with usable bitmaps
    pub const fn count(&self) -> usize {
        self.frames.len()
    }

    /// Rendered tile size in pixels
    pub const fn tile_pixels(&self) -> u32 {
        self.tile_pixels
    }

    /// Bitmap for a base tile at a clockwise quarter-turn count
    pub fn frame(&self, base_index: usize, quarter_turns: u8) -> Option<&RgbaImage> {
        self.frames
            .get(base_index)
            .and_then(|rotations| rotations.get(usize::from(quarter_turns % 4)))
    }
}

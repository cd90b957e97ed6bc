//! Grid rendering and PNG export

use std::path::Path;

use image::RgbaImage;
use image::imageops;

use crate::catalog::variants::TileVariant;
use crate::io::assets::TileAssets;
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::Grid;

/// Compose the collapsed cells of a grid into an RGBA image
///
/// Each collapsed cell blits its variant's pre-rotated bitmap at
/// `(x * px, y * px)`. Uncollapsed and contradicted cells keep the
/// transparent background, so partial grids render the same way the
/// progressive animation draws them.
pub fn render_grid(grid: &Grid, catalog: &[TileVariant], assets: &TileAssets) -> RgbaImage {
    let px = assets.tile_pixels();
    let mut canvas = RgbaImage::new(grid.width() as u32 * px, grid.height() as u32 * px);

    for (index, cell) in grid.iter() {
        let Some(variant_index) = cell.resolved() else {
            continue;
        };
        let Some(variant) = catalog.get(variant_index) else {
            continue;
        };
        let Some(frame) = assets.frame(variant.base_index, variant.quarter_turns) else {
            continue;
        };
        let Some((x, y)) = grid.position_of(index) else {
            continue;
        };
        imageops::replace(
            &mut canvas,
            frame,
            i64::from(x as u32 * px),
            i64::from(y as u32 * px),
        );
    }

    canvas
}

/// Export the rendered grid as a PNG with a transparent background
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &Grid,
    catalog: &[TileVariant],
    assets: &TileAssets,
    output_path: &Path,
) -> Result<()> {
    let img = render_grid(grid, catalog, assets);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

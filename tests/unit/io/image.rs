//! Tests for PNG rendering and export including rotated frames and error paths

#[cfg(test)]
mod tests {
    use collapsetile::catalog::variants::{BASE_TILE_COUNT, build_catalog};
    use collapsetile::io::assets::TileAssets;
    use collapsetile::io::image::{export_grid_as_png, render_grid};
    use collapsetile::spatial::grid::Grid;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    // Tile 0 carries a red marker pixel so rotation shows up in the render
    fn write_tile_assets(dir: &Path) {
        let mut marker = RgbaImage::from_pixel(2, 2, BLACK);
        marker.put_pixel(0, 0, RED);
        marker.save(dir.join("0.png")).expect("marker tile saves");

        for index in 1..BASE_TILE_COUNT {
            let img = RgbaImage::from_pixel(2, 2, BLACK);
            img.save(dir.join(format!("{index}.png")))
                .expect("tile asset saves");
        }
    }

    // Tests the canvas is sized from the grid and uncollapsed cells stay
    // transparent
    // Verified by painting unresolved cells with a fallback tile
    #[test]
    fn test_render_leaves_open_cells_transparent() {
        let temp_dir = TempDir::new().expect("temp dir");
        write_tile_assets(temp_dir.path());
        let assets = TileAssets::load_from_dir(temp_dir.path(), 2).expect("assets load");
        let catalog = build_catalog(assets.count()).expect("catalog builds");

        let grid = Grid::new(2, 1, catalog.len());
        let img = render_grid(&grid, &catalog, &assets);

        assert_eq!(img.dimensions(), (4, 2));
        assert_eq!(img.get_pixel(0, 0).0[3], 0, "open cell should be transparent");
        assert_eq!(img.get_pixel(3, 1).0[3], 0, "open cell should be transparent");
    }

    // Tests collapsed cells blit the frame for their variant, including the
    // pre-rotated frame of a rotated variant
    // Verified by blitting the base frame regardless of quarter turns
    #[test]
    fn test_render_blits_rotated_frames() {
        let temp_dir = TempDir::new().expect("temp dir");
        write_tile_assets(temp_dir.path());
        let assets = TileAssets::load_from_dir(temp_dir.path(), 2).expect("assets load");
        let catalog = build_catalog(assets.count()).expect("catalog builds");

        let mut grid = Grid::new(2, 1, catalog.len());
        grid.cell_mut(0).expect("cell 0").collapse_to(0);
        // First rotation of base tile 0 sits right after the base block
        grid.cell_mut(1)
            .expect("cell 1")
            .collapse_to(BASE_TILE_COUNT);

        let img = render_grid(&grid, &catalog, &assets);

        assert_eq!(img.get_pixel(0, 0), &RED, "unrotated marker stays top-left");
        assert_eq!(img.get_pixel(1, 0), &BLACK);
        assert_eq!(img.get_pixel(3, 0), &RED, "one quarter turn moves the marker");
        assert_eq!(img.get_pixel(2, 0), &BLACK);
    }

    // Tests export creates missing parent directories and writes a decodable
    // file
    // Verified by dropping the directory creation step
    #[test]
    fn test_export_creates_nested_png() {
        let temp_dir = TempDir::new().expect("temp dir");
        write_tile_assets(temp_dir.path());
        let assets = TileAssets::load_from_dir(temp_dir.path(), 2).expect("assets load");
        let catalog = build_catalog(assets.count()).expect("catalog builds");

        let mut grid = Grid::new(2, 2, catalog.len());
        grid.cell_mut(0).expect("cell 0").collapse_to(0);

        let output_path = temp_dir.path().join("out").join("nested").join("result.png");
        let result = export_grid_as_png(&grid, &catalog, &assets, &output_path);

        assert!(result.is_ok(), "PNG export should succeed");
        assert!(output_path.exists(), "PNG file should be created");

        let reloaded = image::open(&output_path).expect("exported PNG decodes");
        assert_eq!(reloaded.width(), 4);
        assert_eq!(reloaded.height(), 4);
    }

    // Tests export surfaces a file system error when the parent path is
    // occupied by a file
    // Verified by swallowing the directory creation failure
    #[test]
    fn test_export_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        write_tile_assets(temp_dir.path());
        let assets = TileAssets::load_from_dir(temp_dir.path(), 2).expect("assets load");
        let catalog = build_catalog(assets.count()).expect("catalog builds");

        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"in the way").expect("blocker file writes");

        let grid = Grid::new(2, 2, catalog.len());
        let output_path = blocker.join("out.png");

        assert!(export_grid_as_png(&grid, &catalog, &assets, &output_path).is_err());
    }
}

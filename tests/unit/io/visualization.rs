//! Tests for collapse-order capture and GIF frame generation

#[cfg(test)]
mod tests {
    use collapsetile::catalog::variants::build_catalog;
    use collapsetile::io::assets::TileAssets;
    use collapsetile::io::visualization::VisualizationCapture;
    use image::{Rgba, RgbaImage};
    use std::path::Path;
    use tempfile::TempDir;

    fn write_tile_assets(dir: &Path) {
        for index in 0..13 {
            let shade = (index * 19 % 256) as u8;
            let img = RgbaImage::from_pixel(2, 2, Rgba([shade, 64, 128, 255]));
            img.save(dir.join(format!("{index}.png")))
                .expect("tile asset saves");
        }
    }

    // Tests VisualizationCapture construction starts empty
    // Verified by initializing with non-empty placements
    #[test]
    fn test_visualization_capture_new() {
        let viz = VisualizationCapture::new(10, 10);
        assert_eq!(viz.placement_count(), 0);
        assert!(viz.placements().is_empty());
    }

    // Tests placement recording keeps collapse order
    // Verified by removing record_placement body
    #[test]
    fn test_record_placement() {
        let mut viz = VisualizationCapture::new(10, 10);

        viz.record_placement(5, 2, 1);
        assert_eq!(viz.placement_count(), 1);

        viz.record_placement(6, 3, 2);
        assert_eq!(viz.placement_count(), 2);

        let placements = viz.placements();
        assert_eq!(placements.first().unwrap().cell, 5);
        assert_eq!(placements.first().unwrap().variant, 2);
        assert_eq!(placements.first().unwrap().step, 1);
        assert_eq!(placements.get(1).unwrap().cell, 6);
        assert_eq!(placements.get(1).unwrap().step, 2);
    }

    // Tests error when exporting an empty capture
    // Verified by removing the empty placements check
    #[test]
    fn test_export_gif_no_placements() {
        let temp_dir = TempDir::new().unwrap();
        write_tile_assets(temp_dir.path());
        let assets = TileAssets::load_from_dir(temp_dir.path(), 2).unwrap();
        let catalog = build_catalog(assets.count()).unwrap();

        let viz = VisualizationCapture::new(10, 10);
        let gif_path = temp_dir.path().join("empty.gif");

        let result = viz.export_gif(&catalog, &assets, &gif_path, 50);
        assert!(result.is_err());
        assert!(!gif_path.exists());
    }

    // Tests export writes a GIF once placements exist
    // Verified by encoding zero frames for short captures
    #[test]
    fn test_export_gif_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        write_tile_assets(temp_dir.path());
        let assets = TileAssets::load_from_dir(temp_dir.path(), 2).unwrap();
        let catalog = build_catalog(assets.count()).unwrap();

        let mut viz = VisualizationCapture::new(3, 3);
        for cell in 0..9 {
            viz.record_placement(cell, cell % catalog.len(), cell + 1);
        }

        let gif_path = temp_dir.path().join("nested").join("capture.gif");
        let result = viz.export_gif(&catalog, &assets, &gif_path, 5);

        assert!(result.is_ok(), "GIF export should succeed");
        assert!(gif_path.exists(), "GIF file should be created");
    }

    // Tests a single placement still produces frames
    // Verified by skipping past the only placement
    #[test]
    fn test_export_gif_single_placement() {
        let temp_dir = TempDir::new().unwrap();
        write_tile_assets(temp_dir.path());
        let assets = TileAssets::load_from_dir(temp_dir.path(), 2).unwrap();
        let catalog = build_catalog(assets.count()).unwrap();

        let mut viz = VisualizationCapture::new(2, 2);
        viz.record_placement(0, 0, 1);

        let gif_path = temp_dir.path().join("single.gif");
        let result = viz.export_gif(&catalog, &assets, &gif_path, 5);

        assert!(result.is_ok(), "single placement export should succeed");
        assert!(gif_path.exists());
    }

    // Tests out-of-range cells and variants are skipped rather than drawn
    // Verified by indexing the catalog with the raw variant
    #[test]
    fn test_export_gif_ignores_out_of_range_events() {
        let temp_dir = TempDir::new().unwrap();
        write_tile_assets(temp_dir.path());
        let assets = TileAssets::load_from_dir(temp_dir.path(), 2).unwrap();
        let catalog = build_catalog(assets.count()).unwrap();

        let mut viz = VisualizationCapture::new(2, 2);
        viz.record_placement(0, 0, 1);
        viz.record_placement(99, 0, 2);
        viz.record_placement(1, catalog.len() + 5, 3);

        assert_eq!(viz.placement_count(), 3);

        let gif_path = temp_dir.path().join("sparse.gif");
        let result = viz.export_gif(&catalog, &assets, &gif_path, 50);

        assert!(result.is_ok(), "export should tolerate stray events");
        assert!(gif_path.exists());
    }
}

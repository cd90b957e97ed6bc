//! Command-line interface for generating tile maps from a tile image directory

use crate::algorithm::executor::WaveCollapse;
use crate::algorithm::selection::CollapseOutcome;
use crate::catalog::variants::build_catalog;
use crate::io::assets::TileAssets;
use crate::io::configuration::{
    DEFAULT_GRID_DIMENSION, DEFAULT_SEED, DEFAULT_TILE_PIXELS, GIF_FRAME_DELAY_MS,
    MAX_GRID_DIMENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::StepProgress;
use crate::io::visualization::VisualizationCapture;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "collapsetile")]
#[command(
    author,
    version,
    about = "Generate edge matched tile maps by wave function collapse"
)]
/// Command-line arguments for the tile map generation tool
pub struct Cli {
    /// Directory containing numbered tile images (0.png, 1.png, ...)
    #[arg(value_name = "TILES_DIR")]
    pub tiles: PathBuf,

    /// Grid width and height in cells
    #[arg(short, long, default_value_t = DEFAULT_GRID_DIMENSION)]
    pub dimension: usize,

    /// Rendered size of each tile in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_PIXELS)]
    pub tile_size: u32,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output PNG path (defaults to a sibling of the tile directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Stop after this many collapse attempts
    #[arg(short = 'm', long)]
    pub max_steps: Option<usize>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    fn validate(&self) -> Result<()> {
        if self.dimension == 0 || self.dimension > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "dimension",
                &self.dimension,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }

        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile-size",
                &self.tile_size,
                &"must be at least 1 pixel",
            ));
        }

        Ok(())
    }
}

/// Orchestrates a single generation run with progress tracking
pub struct GenerationRun {
    cli: Cli,
    progress: Option<StepProgress>,
}

impl GenerationRun {
    /// Create a generation run from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
        }
    }

    /// Run a complete generation pass according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, asset loading, or image
    /// export fails
    pub fn execute(&mut self) -> Result<()> {
        self.cli.validate()?;

        let assets = TileAssets::load_from_dir(&self.cli.tiles, self.cli.tile_size)?;
        let catalog = build_catalog(assets.count())?;

        let dimension = self.cli.dimension;
        let mut executor = WaveCollapse::new(catalog, dimension, dimension, self.cli.seed);
        let cell_count = executor.grid.cell_count();

        let mut capture = self
            .cli
            .visualize
            .then(|| VisualizationCapture::new(dimension, dimension));

        self.progress = self
            .cli
            .should_show_progress()
            .then(|| StepProgress::new(cell_count));

        loop {
            if self
                .cli
                .max_steps
                .is_some_and(|limit| executor.steps >= limit)
            {
                break;
            }

            match executor.step() {
                CollapseOutcome::Done => break,
                CollapseOutcome::Collapsed { cell, variant } => {
                    if let Some(ref mut capture) = capture {
                        capture.record_placement(cell, variant, executor.steps);
                    }
                }
                CollapseOutcome::Contradiction { .. } => {}
            }

            if let Some(ref progress) = self.progress {
                progress.update(
                    executor.grid.collapsed_count(),
                    executor.contradiction_count(),
                );
            }
        }

        let collapsed = executor.grid.collapsed_count();
        let contradicted = executor.contradiction_count();

        if let Some(ref progress) = self.progress {
            progress.finish(format!(
                "collapsed {collapsed}/{cell_count} cells in {} steps",
                executor.steps
            ));
        }

        let output_path = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| Self::default_output_path(&self.cli.tiles));

        export_grid_as_png(&executor.grid, executor.catalog(), &assets, &output_path)?;

        if let Some(capture) = capture {
            let viz_path = Self::visualization_path(&output_path);
            capture.export_gif(executor.catalog(), &assets, &viz_path, GIF_FRAME_DELAY_MS)?;
        }

        // Allow print for user feedback on completion
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!(
                "Collapsed {collapsed}/{cell_count} cells in {} steps ({contradicted} contradicted), wrote {}",
                executor.steps,
                output_path.display()
            );
        }

        Ok(())
    }

    fn default_output_path(tiles_dir: &Path) -> PathBuf {
        let stem = tiles_dir.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = tiles_dir.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn visualization_path(output_path: &Path) -> PathBuf {
        let stem = output_path.file_stem().unwrap_or_default();
        output_path.with_file_name(format!("{}_collapse.gif", stem.to_string_lossy()))
    }
}

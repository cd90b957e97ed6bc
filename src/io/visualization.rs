//! Collapse-order capture and GIF export
//!
//! Records the order cells collapse in during a run, then replays those
//! placements into animation frames. Recording is decoupled from rendering,
//! so the executor stays free of image concerns and contradicted cells
//! simply never appear.

use std::path::Path;

use image::{Frame, Rgba, RgbaImage};

use crate::catalog::variants::TileVariant;
use crate::io::assets::TileAssets;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{GenerationError, Result, invalid_parameter};

/// A single cell collapse event
#[derive(Debug, Clone, Copy)]
pub struct TilePlacement {
    /// Linear index of the collapsed cell
    pub cell: usize,
    /// Catalog index of the placed variant
    pub variant: usize,
    /// Tick at which the collapse happened
    pub step: usize,
}

/// Captures collapse events for post-run animation
pub struct VisualizationCapture {
    placements: Vec<TilePlacement>,
    width: usize,
    height: usize,
}

impl VisualizationCapture {
    /// Create a capture for a grid of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            placements: Vec::with_capacity(width * height),
            width,
            height,
        }
    }

    /// Record a collapse event
    pub fn record_placement(&mut self, cell: usize, variant: usize, step: usize) {
        self.placements.push(TilePlacement {
            cell,
            variant,
            step,
        });
    }

    /// All recorded events in collapse order
    pub fn placements(&self) -> &[TilePlacement] {
        &self.placements
    }

    /// Total number of recorded events
    pub const fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Export the captured run as a GIF with automatic frame skipping
    ///
    /// If the requested delay is faster than viewers reliably support, only
    /// every n-th placement becomes a frame so the apparent speed is kept.
    /// The final state is held on screen with a long closing frame.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placements were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        catalog: &[TileVariant],
        assets: &TileAssets,
        output_path: &Path,
        frame_delay_ms: u32,
    ) -> Result<()> {
        if self.placements.is_empty() {
            return Err(invalid_parameter(
                "visualization",
                &"0 placements",
                &"nothing was captured during the run",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1))
        } else {
            1
        };

        let frames =
            self.generate_frames(catalog, assets, effective_delay_ms, skip_factor as usize);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(
        &self,
        catalog: &[TileVariant],
        assets: &TileAssets,
        delay_ms: u32,
        skip_factor: usize,
    ) -> Vec<Frame> {
        let px = assets.tile_pixels();
        // Black canvas matches the progressive draw style; undrawn cells stay dark
        let mut canvas = RgbaImage::from_pixel(
            self.width as u32 * px,
            self.height as u32 * px,
            Rgba([0, 0, 0, 255]),
        );
        let mut frames = Vec::new();

        frames.push(make_frame(&canvas, delay_ms));

        let mut frame_count = 0usize;

        for placement in &self.placements {
            self.blit_placement(&mut canvas, catalog, assets, placement);
            frame_count += 1;

            if skip_factor > 0 && frame_count % skip_factor == 0 {
                frames.push(make_frame(&canvas, delay_ms));
            }
        }

        if skip_factor > 0 && frame_count % skip_factor != 0 {
            frames.push(make_frame(&canvas, delay_ms));
        }

        // Final frame displays longer for better visibility
        frames.push(make_frame(&canvas, delay_ms * 25));

        frames
    }

    fn blit_placement(
        &self,
        canvas: &mut RgbaImage,
        catalog: &[TileVariant],
        assets: &TileAssets,
        placement: &TilePlacement,
    ) {
        let Some(variant) = catalog.get(placement.variant) else {
            return;
        };
        let Some(frame) = assets.frame(variant.base_index, variant.quarter_turns) else {
            return;
        };
        if self.width == 0 {
            return;
        }
        let x = placement.cell % self.width;
        let y = placement.cell / self.width;
        if y >= self.height {
            return;
        }
        let px = assets.tile_pixels();
        image::imageops::replace(
            canvas,
            frame,
            i64::from(x as u32 * px),
            i64::from(y as u32 * px),
        );
    }
}

fn make_frame(canvas: &RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(
        canvas.clone(),
        0,
        0,
        image::Delay::from_numer_denom_ms(delay_ms, 1),
    )
}

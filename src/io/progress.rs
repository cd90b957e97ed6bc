//! Progress reporting for generation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Cells: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a single generation run
///
/// Tracks collapsed cells against the grid total and surfaces the running
/// contradiction count in the message slot.
pub struct StepProgress {
    bar: ProgressBar,
}

impl StepProgress {
    /// Create a bar sized to the total cell count
    pub fn new(total_cells: usize) -> Self {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(CELL_STYLE.clone());
        Self { bar }
    }

    /// Report collapsed and contradicted cell counts
    pub fn update(&self, collapsed: usize, contradictions: usize) {
        self.bar.set_position(collapsed as u64);
        if contradictions > 0 {
            self.bar
                .set_message(format!("({contradictions} contradicted)"));
        }
    }

    /// Finish the bar with a closing message
    pub fn finish(&self, message: String) {
        self.bar.finish_with_message(message);
    }
}

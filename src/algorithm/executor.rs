//! Step-driven orchestration of collapse and propagation
//!
//! The executor owns everything a run needs: the variant catalog, its
//! precomputed adjacency table, the grid, the seeded random stream, and the
//! set of cells already noticed as contradicted. Callers drive it one tick
//! at a time and read outcomes; nothing here touches the filesystem.

use bitvec::prelude::*;

use crate::algorithm::propagation::propagate;
use crate::algorithm::selection::{CollapseOutcome, RandomSelector, collapse_step};
use crate::catalog::adjacency::AdjacencyTable;
use crate::catalog::variants::TileVariant;
use crate::spatial::grid::{CellView, Grid};

/// Wave function collapse executor over an edge-matched tile catalog
///
/// One `step` is exactly one collapse attempt followed by a full
/// propagation pass. Contradicted cells are remembered so the entropy scan
/// stops reconsidering them; they stay uncollapsed for the life of the run.
pub struct WaveCollapse {
    catalog: Vec<TileVariant>,
    adjacency: AdjacencyTable,
    /// Current grid state
    pub grid: Grid,
    selector: RandomSelector,
    contradicted: BitVec,
    /// Number of ticks taken so far
    pub steps: usize,
}

impl WaveCollapse {
    /// Create an executor over a catalog with a fresh, fully open grid
    pub fn new(catalog: Vec<TileVariant>, width: usize, height: usize, seed: u64) -> Self {
        let adjacency = AdjacencyTable::compute(&catalog);
        let variant_count = catalog.len();
        Self {
            catalog,
            adjacency,
            grid: Grid::new(width, height, variant_count),
            selector: RandomSelector::new(seed),
            contradicted: bitvec![0; width * height],
            steps: 0,
        }
    }

    /// Tile variants in catalog order
    pub fn catalog(&self) -> &[TileVariant] {
        &self.catalog
    }

    /// Precomputed adjacency table for the catalog
    pub const fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    /// One generation tick: a collapse attempt plus a full propagation pass
    ///
    /// A contradiction outcome flags the cell as unselectable from here on.
    /// Propagation runs on every tick, including contradiction ticks and
    /// the tick that collapses the final cell.
    pub fn step(&mut self) -> CollapseOutcome {
        self.steps += 1;
        let outcome = collapse_step(&mut self.grid, &self.contradicted, &mut self.selector);
        if let CollapseOutcome::Contradiction { cell } = outcome {
            if let Some(mut flag) = self.contradicted.get_mut(cell) {
                *flag = true;
            }
        }
        propagate(&mut self.grid, &self.adjacency);
        outcome
    }

    /// Drive ticks until no selectable cell remains
    pub fn run_to_completion(&mut self) {
        loop {
            if self.step() == CollapseOutcome::Done {
                break;
            }
        }
    }

    /// Whether the next tick would report `Done`
    pub fn finished(&self) -> bool {
        self.grid.iter().all(|(index, cell)| {
            cell.collapsed || self.contradicted.get(index).as_deref() == Some(&true)
        })
    }

    /// Whether every cell collapsed with no contradictions
    pub fn is_complete(&self) -> bool {
        self.grid.is_fully_collapsed()
    }

    /// Number of cells noticed as contradicted
    pub fn contradiction_count(&self) -> usize {
        self.contradicted.count_ones()
    }

    /// Linear indices of cells noticed as contradicted
    pub fn contradicted_cells(&self) -> Vec<usize> {
        self.contradicted.iter_ones().collect()
    }

    /// Render-facing view of one cell
    pub fn view(&self, index: usize) -> Option<CellView> {
        self.grid.view(index)
    }

    /// Reopen every cell in place
    ///
    /// Catalog, adjacency table, and the current random stream are kept;
    /// pair with `reseed` to replay a run exactly.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.contradicted.fill(false);
        self.steps = 0;
    }

    /// Replace the random stream for a reproducible rerun
    pub fn reseed(&mut self, seed: u64) {
        self.selector = RandomSelector::new(seed);
    }
}

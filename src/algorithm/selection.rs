//! Entropy-guided cell selection and the single-cell collapse step
//!
//! Entropy of a cell is simply its remaining candidate count. Each step
//! scans the grid for the minimum-entropy uncollapsed cell, breaking ties
//! uniformly at random, then fixes that cell to one candidate drawn
//! uniformly. A selected cell with no candidates left is reported as a
//! contradiction and left untouched.

use std::cmp::Ordering;

use bitvec::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::spatial::grid::{Cell, Grid};

/// Outcome of a single collapse step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollapseOutcome {
    /// No selectable cell remains; the run is finished
    Done,
    /// One cell was fixed to one variant drawn from its candidate set
    Collapsed {
        /// Linear index of the collapsed cell
        cell: usize,
        /// Catalog index of the chosen variant
        variant: usize,
    },
    /// The selected cell had no candidates left and was not mutated
    Contradiction {
        /// Linear index of the contradicted cell
        cell: usize,
    },
}

/// Deterministic source of uniform random draws
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a selector seeded for reproducible runs
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index into a collection of `len` elements
    ///
    /// Returns `None` for an empty collection without consuming a draw, so
    /// contradictions do not perturb the random stream.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}

/// Candidate count of an uncollapsed cell, `None` once collapsed
pub fn entropy(cell: &Cell) -> Option<usize> {
    (!cell.collapsed).then(|| cell.options.count())
}

/// Perform one entropy-guided collapse step
///
/// Collapsed cells and cells flagged in `unselectable` are skipped by the
/// entropy scan. The tie set keeps grid order, so runs with equal seeds
/// collapse identically. Exactly one cell is mutated on success; nothing is
/// mutated on `Done` or on a contradiction.
pub fn collapse_step(
    grid: &mut Grid,
    unselectable: &BitSlice,
    selector: &mut RandomSelector,
) -> CollapseOutcome {
    let mut min_entropy = usize::MAX;
    let mut tie_set: Vec<usize> = Vec::new();

    for index in 0..grid.cell_count() {
        if unselectable.get(index).as_deref() == Some(&true) {
            continue;
        }
        let Some(candidate_entropy) = grid.cell(index).and_then(entropy) else {
            continue;
        };
        match candidate_entropy.cmp(&min_entropy) {
            Ordering::Less => {
                min_entropy = candidate_entropy;
                tie_set.clear();
                tie_set.push(index);
            }
            Ordering::Equal => tie_set.push(index),
            Ordering::Greater => {}
        }
    }

    let Some(pick) = selector.pick_index(tie_set.len()) else {
        return CollapseOutcome::Done;
    };
    let Some(&cell_index) = tie_set.get(pick) else {
        return CollapseOutcome::Done;
    };

    let candidates = grid
        .cell(cell_index)
        .map(|cell| cell.options.to_vec())
        .unwrap_or_default();

    let Some(choice) = selector.pick_index(candidates.len()) else {
        return CollapseOutcome::Contradiction { cell: cell_index };
    };
    let Some(&variant) = candidates.get(choice) else {
        return CollapseOutcome::Contradiction { cell: cell_index };
    };

    if let Some(cell) = grid.cell_mut(cell_index) {
        cell.collapse_to(variant);
    }

    CollapseOutcome::Collapsed {
        cell: cell_index,
        variant,
    }
}

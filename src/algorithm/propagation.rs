//! Worklist-driven constraint propagation
//!
//! After every collapse the whole grid is re-derived to a fixpoint: each
//! processed cell restricts its four neighbors to the variants some current
//! candidate of the cell still allows, and any neighbor that strictly
//! shrinks is requeued. Narrowing a cell to the empty set is a legitimate
//! outcome; propagation keeps going and the contradiction surfaces later
//! through selection.

use bitvec::prelude::*;

use crate::algorithm::bitset::OptionSet;
use crate::catalog::adjacency::AdjacencyTable;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;

/// LIFO worklist over cell indices with constant-time duplicate suppression
///
/// A bitset mirrors stack membership so a cell is never queued twice at
/// once. Re-queueing after a pop is allowed and required for fixpoint
/// iteration.
pub struct Worklist {
    stack: Vec<usize>,
    queued: BitVec,
}

impl Worklist {
    /// Create a worklist preloaded with every cell index in order
    ///
    /// Popping therefore starts from the highest index, matching the
    /// stepwise contract for replayable runs.
    pub fn seeded(cell_count: usize) -> Self {
        Self {
            stack: (0..cell_count).collect(),
            queued: bitvec![1; cell_count],
        }
    }

    /// Queue a cell index unless it is already pending
    pub fn push(&mut self, index: usize) {
        if self.queued.get(index).as_deref() == Some(&true) {
            return;
        }
        if index < self.queued.len() {
            self.queued.set(index, true);
            self.stack.push(index);
        }
    }

    /// Pop the most recently queued cell index
    pub fn pop(&mut self) -> Option<usize> {
        let index = self.stack.pop()?;
        if index < self.queued.len() {
            self.queued.set(index, false);
        }
        Some(index)
    }

    /// Number of pending cells
    pub const fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether no cells are pending
    pub const fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Candidate set for `neighbor_index` after restriction by `index`, if it
/// strictly shrinks
fn narrowed_options(
    grid: &Grid,
    adjacency: &AdjacencyTable,
    index: usize,
    neighbor_index: usize,
    direction: Direction,
) -> Option<OptionSet> {
    let cell = grid.cell(index)?;
    let neighbor = grid.cell(neighbor_index)?;
    if neighbor.collapsed {
        return None;
    }
    let allowed = adjacency.allowed_union(&cell.options, direction);
    let narrowed = neighbor.options.intersection(&allowed);
    (narrowed.count() < neighbor.options.count()).then_some(narrowed)
}

/// Run constraint propagation to a fixpoint
///
/// The worklist is seeded with every cell, so one call after a collapse
/// restores arc consistency for the whole grid. Collapsed neighbors are
/// never touched. Terminates because a cell is only requeued when its
/// candidate set strictly shrank and the total candidate count never
/// increases.
pub fn propagate(grid: &mut Grid, adjacency: &AdjacencyTable) {
    let mut worklist = Worklist::seeded(grid.cell_count());

    while let Some(index) = worklist.pop() {
        for direction in Direction::ALL {
            let Some(neighbor_index) = grid.neighbor(index, direction) else {
                continue;
            };
            let Some(narrowed) =
                narrowed_options(grid, adjacency, index, neighbor_index, direction)
            else {
                continue;
            };
            if let Some(neighbor) = grid.cell_mut(neighbor_index) {
                neighbor.options = narrowed;
            }
            worklist.push(neighbor_index);
        }
    }
}

//! Grid state for wave function collapse over a fixed rectangle of cells
//!
//! Cells are addressed either by `(x, y)` position or by the linear index
//! `y * width + x`; both conversions are bounds-checked. The grid never
//! wraps: neighbor lookups past an edge return `None`.

use ndarray::Array2;

use crate::algorithm::bitset::OptionSet;
use crate::spatial::direction::Direction;

/// One slot of the generation grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Variants still able to occupy this slot
    pub options: OptionSet,
    /// Whether the slot has been fixed to a single variant
    pub collapsed: bool,
}

impl Cell {
    /// Create an open cell holding every catalog variant
    pub fn new(variant_count: usize) -> Self {
        Self {
            options: OptionSet::all(variant_count),
            collapsed: false,
        }
    }

    /// Fix this cell to a single variant
    pub fn collapse_to(&mut self, variant: usize) {
        let mut only = OptionSet::new(self.options.variant_count());
        only.insert(variant);
        self.options = only;
        self.collapsed = true;
    }

    /// The resolved variant index, if this cell has been collapsed
    pub fn resolved(&self) -> Option<usize> {
        self.collapsed.then(|| self.options.single()).flatten()
    }
}

/// Read-only render state of one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellView {
    /// Fixed to a single catalog variant
    Collapsed {
        /// Catalog index of the resolved variant
        variant: usize,
    },
    /// Still open; `remaining` of 0 marks a contradicted cell
    Uncollapsed {
        /// Number of candidate variants left
        remaining: usize,
    },
}

/// Fixed-size grid of cells with bounds-checked index math
///
/// Owns all cells exclusively. Constructed once per run; `reset` restores
/// the fully open state in place without reallocating catalog data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    width: usize,
    height: usize,
    variant_count: usize,
}

impl Grid {
    /// Create a grid with every cell open to all catalog variants
    pub fn new(width: usize, height: usize, variant_count: usize) -> Self {
        let cells = Array2::from_elem((height, width), Cell::new(variant_count));
        Self {
            cells,
            width,
            height,
            variant_count,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of variants each cell starts with
    pub const fn variant_count(&self) -> usize {
        self.variant_count
    }

    /// Linear index for a position, or `None` when out of range
    pub const fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Position for a linear index, or `None` when out of range
    pub const fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.width * self.height {
            Some((index % self.width, index / self.width))
        } else {
            None
        }
    }

    /// Linear index of the adjacent cell in `direction`, if it exists
    ///
    /// Edges do not wrap; stepping past the boundary returns `None`.
    pub const fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let Some((x, y)) = self.position_of(index) else {
            return None;
        };
        let (dx, dy) = direction.offset();
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx >= 0 && ny >= 0 && (nx as usize) < self.width && (ny as usize) < self.height {
            Some(ny as usize * self.width + nx as usize)
        } else {
            None
        }
    }

    /// Borrow the cell at a linear index
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        let (x, y) = self.position_of(index)?;
        self.cells.get([y, x])
    }

    /// Mutably borrow the cell at a linear index
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        let (x, y) = self.position_of(index)?;
        self.cells.get_mut([y, x])
    }

    /// Iterate cells in linear-index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells.iter().enumerate()
    }

    /// Reopen every cell to the full variant set
    pub fn reset(&mut self) {
        let variant_count = self.variant_count;
        for cell in &mut self.cells {
            *cell = Cell::new(variant_count);
        }
    }

    /// Sum of candidate counts over all cells
    ///
    /// Strictly decreases whenever a collapse or propagation narrows any
    /// cell, which is the termination measure for the whole run.
    pub fn total_options(&self) -> usize {
        self.cells.iter().map(|cell| cell.options.count()).sum()
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.collapsed).count()
    }

    /// Whether every cell has been collapsed
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(|cell| cell.collapsed)
    }

    /// Render-facing view of the cell at a linear index
    pub fn view(&self, index: usize) -> Option<CellView> {
        self.cell(index).map(|cell| {
            cell.resolved().map_or(
                CellView::Uncollapsed {
                    remaining: cell.options.count(),
                },
                |variant| CellView::Collapsed { variant },
            )
        })
    }
}

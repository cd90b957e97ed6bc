//! Tile variant definitions and catalog construction
//!
//! The catalog starts from a hand-authored set of base tiles whose faces
//! carry short edge signatures, then derives the three clockwise rotations
//! of every base tile. Rotated variants are distinct catalog entries that
//! keep the base index of the asset they render with; rotation-symmetric
//! duplicates are kept rather than folded together.

use crate::io::error::{GenerationError, Result};
use crate::spatial::direction::Direction;

/// Number of hand-authored base tiles the catalog requires
pub const BASE_TILE_COUNT: usize = BASE_EDGES.len();

/// Edge signatures of the base tile set, one row per asset index
///
/// Rows are `[up, right, down, left]`. Two faces mate when their signatures
/// are equal, so the letters only need to agree with the artwork, not mean
/// anything on their own.
const BASE_EDGES: [[&str; 4]; 13] = [
    ["AAA", "AAA", "AAA", "AAA"],
    ["BBB", "BBB", "BBB", "BBB"],
    ["AAA", "BCB", "AAA", "AAA"],
    ["BBB", "BDB", "BBB", "BDB"],
    ["ABB", "BCB", "BBA", "AAA"],
    ["BBB", "BBB", "BBB", "BBB"],
    ["BBB", "BCB", "BBB", "BCB"],
    ["BDB", "BCB", "BDB", "BCB"],
    ["BDB", "BBB", "BCB", "BBB"],
    ["BCB", "BCB", "BBB", "BCB"],
    ["CCC", "CCC", "CCC", "CCC"],
    ["CCC", "AAA", "CCC", "AAA"],
    ["AAA", "BCB", "AAA", "BCB"],
];

/// A single orientation of a base tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileVariant {
    /// Index of the hand-authored base tile, which is also its asset index
    pub base_index: usize,
    /// Clockwise quarter-turns applied to the base asset when rendering
    pub quarter_turns: u8,
    /// Edge signatures in `[up, right, down, left]` slot order
    pub edges: [String; 4],
}

impl TileVariant {
    /// Create an unrotated variant from borrowed edge signatures
    pub fn new(base_index: usize, edges: [&str; 4]) -> Self {
        Self {
            base_index,
            quarter_turns: 0,
            edges: edges.map(str::to_owned),
        }
    }

    /// Edge signature facing `direction`
    pub fn edge(&self, direction: Direction) -> &str {
        self.edges
            .get(direction.index())
            .map_or("", String::as_str)
    }

    /// This variant rotated clockwise by `quarter_turns` additional turns
    ///
    /// One clockwise turn moves each face one slot around the tile, so the
    /// edge that was up ends up on the right. The asset index is unchanged;
    /// only the accumulated turn count and the edge slots move.
    #[must_use]
    pub fn rotated(&self, quarter_turns: u8) -> Self {
        let turns = usize::from(quarter_turns % 4);
        let edges = std::array::from_fn(|slot| {
            self.edges
                .get((slot + 4 - turns) % 4)
                .cloned()
                .unwrap_or_default()
        });
        Self {
            base_index: self.base_index,
            quarter_turns: (self.quarter_turns + quarter_turns % 4) % 4,
            edges,
        }
    }
}

/// Build the full variant catalog from the hand-authored base set
///
/// Produces the base tiles in asset order followed by their one-, two-, and
/// three-quarter-turn rotations, grouped per base tile in that order. The
/// returned ordering is stable and load-bearing: variant indices double as
/// adjacency table rows and as deterministic tie-break order.
///
/// # Errors
///
/// Returns [`GenerationError::MissingAssets`] when fewer assets are
/// available than the base set requires.
pub fn build_catalog(available_assets: usize) -> Result<Vec<TileVariant>> {
    if available_assets < BASE_TILE_COUNT {
        return Err(GenerationError::MissingAssets {
            required: BASE_TILE_COUNT,
            available: available_assets,
        });
    }

    let mut catalog: Vec<TileVariant> = BASE_EDGES
        .iter()
        .enumerate()
        .map(|(base_index, edges)| TileVariant::new(base_index, *edges))
        .collect();

    for base_index in 0..BASE_TILE_COUNT {
        let Some(base) = catalog.get(base_index).cloned() else {
            continue;
        };
        for turns in 1..=3 {
            catalog.push(base.rotated(turns));
        }
    }

    Ok(catalog)
}

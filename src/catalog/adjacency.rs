//! Precomputed adjacency between catalog variants
//!
//! For every variant and direction this table holds the set of variants
//! that may occupy the neighboring cell. Built once per catalog; lookups
//! during propagation are bitset reads.

use crate::algorithm::bitset::OptionSet;
use crate::catalog::variants::TileVariant;
use crate::spatial::direction::Direction;

/// Per-variant, per-direction compatibility sets
#[derive(Clone, Debug)]
pub struct AdjacencyTable {
    allowed: Vec<[OptionSet; 4]>,
    variant_count: usize,
}

impl AdjacencyTable {
    /// Derive the table from a variant catalog
    ///
    /// Variant `u` may sit in direction `d` from variant `v` exactly when
    /// the face of `u` that points back at `v` matches `v`'s face toward
    /// `u`: `u.edge(d.opposite()) == v.edge(d)`. Signatures are compared as
    /// plain strings.
    pub fn compute(catalog: &[TileVariant]) -> Self {
        let variant_count = catalog.len();
        let mut allowed = Vec::with_capacity(variant_count);

        for variant in catalog {
            let mut sets: [OptionSet; 4] =
                std::array::from_fn(|_| OptionSet::new(variant_count));
            for direction in Direction::ALL {
                let Some(set) = sets.get_mut(direction.index()) else {
                    continue;
                };
                for (candidate_index, candidate) in catalog.iter().enumerate() {
                    if candidate.edge(direction.opposite()) == variant.edge(direction) {
                        set.insert(candidate_index);
                    }
                }
            }
            allowed.push(sets);
        }

        Self {
            allowed,
            variant_count,
        }
    }

    /// Number of variants the table covers
    pub const fn variant_count(&self) -> usize {
        self.variant_count
    }

    /// Variants allowed in `direction` from `variant`
    pub fn allowed(&self, variant: usize, direction: Direction) -> Option<&OptionSet> {
        self.allowed
            .get(variant)
            .and_then(|sets| sets.get(direction.index()))
    }

    /// Union of allowed sets over every variant in `options`
    ///
    /// This is the full legal candidate set for the neighboring cell in
    /// `direction` given that the source cell still holds `options`. An
    /// empty `options` set yields an empty union.
    pub fn allowed_union(&self, options: &OptionSet, direction: Direction) -> OptionSet {
        let mut union = OptionSet::new(self.variant_count);
        for variant in options.iter() {
            if let Some(set) = self.allowed(variant, direction) {
                union.union_with(set);
            }
        }
        union
    }
}

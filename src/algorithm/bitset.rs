use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset tracking which tile variants remain possible for a cell
///
/// Variant indices are dense and 0-based, matching catalog order. Provides
/// O(1) membership testing and whole-set intersection and union.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSet {
    bits: BitVec,
    variant_count: usize,
}

impl OptionSet {
    /// Create a set with no variants present
    pub fn new(variant_count: usize) -> Self {
        Self {
            bits: bitvec![0; variant_count],
            variant_count,
        }
    }

    /// Create a set containing every catalog variant
    pub fn all(variant_count: usize) -> Self {
        Self {
            bits: bitvec![1; variant_count],
            variant_count,
        }
    }

    /// Insert a variant index, ignoring indices beyond the catalog
    pub fn insert(&mut self, variant: usize) {
        if variant < self.variant_count {
            self.bits.set(variant, true);
        }
    }

    /// Test variant membership
    pub fn contains(&self, variant: usize) -> bool {
        self.bits.get(variant).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new set containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Merge another set into this one in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Test if no variants are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count variants in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of variants the set can hold
    pub const fn variant_count(&self) -> usize {
        self.variant_count
    }

    /// The sole member, if the set holds exactly one variant
    pub fn single(&self) -> Option<usize> {
        (self.count() == 1).then(|| self.bits.first_one()).flatten()
    }

    /// Iterate present variant indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all variant indices as a vector in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionSet({} variants: {:?})", self.count(), self.to_vec())
    }
}

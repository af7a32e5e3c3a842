use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-size bitset tracking which catalog tiles remain candidates
///
/// Indices are the dense 0-based positions assigned by the catalog.
/// Provides O(1) membership testing and efficient set intersection, which is
/// the hot operation during constraint propagation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
    universe: usize,
}

impl CandidateSet {
    /// Create a set with no candidates present
    pub fn empty(universe: usize) -> Self {
        Self {
            bits: bitvec![0; universe],
            universe,
        }
    }

    /// Create a set containing every tile in the universe
    pub fn all(universe: usize) -> Self {
        Self {
            bits: bitvec![1; universe],
            universe,
        }
    }

    /// Create a set containing exactly one tile
    pub fn singleton(universe: usize, index: usize) -> Self {
        let mut set = Self::empty(universe);
        set.insert(index);
        set
    }

    /// Insert a tile index; out-of-universe indices are ignored
    pub fn insert(&mut self, index: usize) {
        if index < self.universe {
            self.bits.set(index, true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Intersect this set with another in place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Shrink the set to a single remaining candidate
    pub fn collapse_to(&mut self, index: usize) {
        self.bits.fill(false);
        self.insert(index);
    }

    /// Test whether no candidates remain
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count remaining candidates
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract remaining candidate indices in ascending order
    pub fn indices(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }

    /// Size of the tile universe this set ranges over
    pub const fn universe(&self) -> usize {
        self.universe
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CandidateSet({}/{}: {:?})",
            self.count(),
            self.universe,
            self.indices()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::CandidateSet;

    #[test]
    fn test_intersection_keeps_common_candidates() {
        let mut a = CandidateSet::empty(8);
        a.insert(1);
        a.insert(3);
        a.insert(5);

        let mut b = CandidateSet::empty(8);
        b.insert(3);
        b.insert(5);
        b.insert(7);

        a.intersect_with(&b);
        assert_eq!(a.indices(), vec![3, 5]);
    }

    #[test]
    fn test_disjoint_intersection_is_empty() {
        let mut a = CandidateSet::singleton(4, 0);
        let b = CandidateSet::singleton(4, 3);

        a.intersect_with(&b);
        assert!(a.is_empty());
        assert_eq!(a.count(), 0);
    }

    #[test]
    fn test_collapse_to_leaves_one_candidate() {
        let mut set = CandidateSet::all(6);
        set.collapse_to(2);

        assert_eq!(set.count(), 1);
        assert!(set.contains(2));
        assert!(!set.contains(3));
    }

    #[test]
    fn test_out_of_universe_insert_is_ignored() {
        let mut set = CandidateSet::empty(3);
        set.insert(9);
        assert!(set.is_empty());
    }
}

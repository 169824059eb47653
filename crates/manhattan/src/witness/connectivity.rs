//! Manhattan-connectivity of subsets over a built index.

use crate::point_set::PointSet;

use super::build::PairWitnessIndex;

/// Read-only view answering connectivity queries; cheap to copy.
#[derive(Clone, Copy, Debug)]
pub struct Connectivity<'a> {
    index: &'a PairWitnessIndex,
}

impl<'a> Connectivity<'a> {
    pub fn new(index: &'a PairWitnessIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a PairWitnessIndex {
        self.index
    }

    /// `i` and `j` are aligned, or `subset` holds one of their witnesses.
    #[inline]
    pub fn pair_connected(&self, i: usize, j: usize, subset: PointSet) -> bool {
        self.index.is_aligned(i, j) || subset.intersects(self.index.witness(i, j))
    }

    /// Every pair of `subset` is pair-connected. Sets of size ≤ 1 are connected.
    pub fn is_connected(&self, subset: PointSet) -> bool {
        subset.iter().all(|i| {
            subset
                .above(i)
                .iter()
                .all(|j| self.pair_connected(i, j, subset))
        })
    }

    /// Pairs `i < j` of `subset` that `subset` leaves unconnected, lexicographically.
    pub fn unresolved_pairs(&self, subset: PointSet) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for i in subset.iter() {
            for j in subset.above(i).iter() {
                if !self.pair_connected(i, j, subset) {
                    out.push((i, j));
                }
            }
        }
        out
    }
}

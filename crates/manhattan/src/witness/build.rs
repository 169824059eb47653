//! Construction of the aligned rows and pair witness sets.

use crate::cfg::MAX_POINTS;
use crate::error::MhcError;
use crate::point::Point;
use crate::point_set::PointSet;

/// Aligned rows plus an `N × N` table of witness sets (row-major, symmetric).
#[derive(Clone, Debug)]
pub struct PairWitnessIndex {
    n: usize,
    aligned: Vec<PointSet>,
    witness: Vec<PointSet>,
}

impl PairWitnessIndex {
    /// Build over an ordered point list. O(N³); aligned pairs skip the rectangle scan.
    pub fn build(points: &[Point]) -> Result<Self, MhcError> {
        let n = points.len();
        if n > MAX_POINTS {
            return Err(MhcError::CapacityExceeded { len: n });
        }
        let mut aligned = vec![PointSet::empty(); n];
        let mut witness = vec![PointSet::empty(); n * n];
        let mut aligned_pairs = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&points[i], &points[j]);
                if a.is_aligned_with(b) {
                    aligned[i].insert(j);
                    aligned[j].insert(i);
                    aligned_pairs += 1;
                    continue;
                }
                // k == i or k == j never witnesses, even when coordinates repeat
                let w: PointSet = (0..n)
                    .filter(|&k| k != i && k != j && points[k].in_rect(a, b))
                    .collect();
                witness[i * n + j] = w;
                witness[j * n + i] = w;
            }
        }
        tracing::trace!(points = n, aligned_pairs, "pair witness index built");
        Ok(Self {
            n,
            aligned,
            witness,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Points sharing a coordinate with `i`.
    #[inline]
    pub fn aligned(&self, i: usize) -> PointSet {
        self.aligned[i]
    }

    #[inline]
    pub fn is_aligned(&self, i: usize, j: usize) -> bool {
        self.aligned[i].contains(j)
    }

    /// Witnesses of the pair `(i, j)`; empty for aligned pairs and for `i == j`.
    #[inline]
    pub fn witness(&self, i: usize, j: usize) -> PointSet {
        self.witness[i * self.n + j]
    }
}

//! `PointSet`: a subset of the universe as a fixed-width bitset.
//!
//! Bit `i` (counting from the LSB) is set iff universe point `i` is in the set.
//! Only bits `0..MAX_POINTS` are ever used; callers enforce the cap when they
//! build a universe, so index arguments here are checked by `debug_assert!` only.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::cfg::MAX_POINTS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointSet(u64);

impl PointSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn singleton(i: usize) -> Self {
        debug_assert!(i < MAX_POINTS, "index {i} out of PointSet range");
        Self(1 << i)
    }

    /// All indices in `lo..hi`.
    pub fn range(lo: usize, hi: usize) -> Self {
        debug_assert!(hi <= MAX_POINTS && lo <= hi);
        let below = |k: usize| (1u64 << k) - 1;
        Self(below(hi) & !below(lo))
    }

    #[inline]
    pub fn contains(self, i: usize) -> bool {
        i < MAX_POINTS && (self.0 >> i) & 1 != 0
    }

    #[inline]
    pub fn insert(&mut self, i: usize) {
        debug_assert!(i < MAX_POINTS, "index {i} out of PointSet range");
        self.0 |= 1 << i;
    }

    #[inline]
    pub fn remove(&mut self, i: usize) {
        debug_assert!(i < MAX_POINTS, "index {i} out of PointSet range");
        self.0 &= !(1 << i);
    }

    #[inline]
    pub fn with(self, i: usize) -> Self {
        let mut out = self;
        out.insert(i);
        out
    }

    /// Population count.
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn intersects(self, other: PointSet) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn is_subset(self, other: PointSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// The members strictly greater than `i`.
    #[inline]
    pub fn above(self, i: usize) -> Self {
        if i + 1 >= MAX_POINTS {
            return Self::empty();
        }
        Self(self.0 & (u64::MAX << (i + 1)))
    }

    /// Members in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        PointSetIter { bits: self.0 }
    }
}

struct PointSetIter {
    bits: u64,
}

impl Iterator for PointSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let i = self.bits.trailing_zeros() as usize;
        // clear lowest set bit
        self.bits &= self.bits - 1;
        Some(i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl BitOr for PointSet {
    type Output = PointSet;
    #[inline]
    fn bitor(self, rhs: PointSet) -> PointSet {
        PointSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for PointSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: PointSet) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PointSet {
    type Output = PointSet;
    #[inline]
    fn bitand(self, rhs: PointSet) -> PointSet {
        PointSet(self.0 & rhs.0)
    }
}

impl FromIterator<usize> for PointSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = PointSet::empty();
        for i in iter {
            set.insert(i);
        }
        set
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (k, i) in self.iter().enumerate() {
            if k > 0 {
                write!(f, ",")?;
            }
            write!(f, "{i}")?;
        }
        write!(f, "}}")
    }
}

//! Integer grid points.

use std::fmt;

/// A point `(x, y)` on the integer grid. Duplicates are allowed in a universe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shares a row or a column with `other`.
    #[inline]
    pub fn is_aligned_with(&self, other: &Point) -> bool {
        self.x == other.x || self.y == other.y
    }

    /// Whether `self` lies in the closed axis-aligned rectangle spanned by `a` and `b`.
    #[inline]
    pub fn in_rect(&self, a: &Point, b: &Point) -> bool {
        let (x_lo, x_hi) = (a.x.min(b.x), a.x.max(b.x));
        let (y_lo, y_hi) = (a.y.min(b.y), a.y.max(b.y));
        (x_lo..=x_hi).contains(&self.x) && (y_lo..=y_hi).contains(&self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Convenience for tests and callers holding tuple lists.
pub fn points_from_tuples(tuples: &[(i64, i64)]) -> Vec<Point> {
    tuples.iter().copied().map(Point::from).collect()
}

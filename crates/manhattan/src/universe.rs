//! The indexed universe of one check or search call.
//!
//! Input points occupy indices `0..n`, candidates `n..N`. The ordering is fixed
//! at construction; every `PointSet` produced during the call refers to it.

use std::ops::Range;

use crate::cfg::MAX_POINTS;
use crate::error::MhcError;
use crate::point::Point;
use crate::point_set::PointSet;

#[derive(Clone, Debug)]
pub struct Universe {
    points: Vec<Point>,
    n_input: usize,
}

impl Universe {
    /// Concatenate `input` and `candidates`. Fails before copying anything when
    /// the total exceeds [`MAX_POINTS`].
    pub fn new(input: &[Point], candidates: &[Point]) -> Result<Self, MhcError> {
        let len = input.len() + candidates.len();
        if len > MAX_POINTS {
            return Err(MhcError::CapacityExceeded { len });
        }
        let mut points = Vec::with_capacity(len);
        points.extend_from_slice(input);
        points.extend_from_slice(candidates);
        Ok(Self {
            points,
            n_input: input.len(),
        })
    }

    /// A universe with no candidates (plain connectivity checks).
    pub fn from_points(points: &[Point]) -> Result<Self, MhcError> {
        Self::new(points, &[])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn n_input(&self) -> usize {
        self.n_input
    }

    #[inline]
    pub fn n_candidates(&self) -> usize {
        self.points.len() - self.n_input
    }

    #[inline]
    pub fn candidate_range(&self) -> Range<usize> {
        self.n_input..self.points.len()
    }

    pub fn input_mask(&self) -> PointSet {
        PointSet::range(0, self.n_input)
    }

    pub fn candidate_mask(&self) -> PointSet {
        PointSet::range(self.n_input, self.points.len())
    }

    #[inline]
    pub fn point(&self, i: usize) -> Point {
        self.points[i]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::points_from_tuples;

    #[test]
    fn masks_split_input_and_candidates() {
        let input = points_from_tuples(&[(0, 0), (1, 1)]);
        let cand = points_from_tuples(&[(1, 0), (0, 1), (2, 2)]);
        let u = Universe::new(&input, &cand).unwrap();
        assert_eq!(u.len(), 5);
        assert_eq!(u.input_mask().iter().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(u.candidate_mask().iter().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(u.candidate_range(), 2..5);
        assert_eq!(u.point(3), Point::new(0, 1));
    }

    #[test]
    fn capacity_is_checked_up_front() {
        let input: Vec<Point> = (0..40).map(|i| Point::new(i, 0)).collect();
        let cand: Vec<Point> = (0..24).map(|i| Point::new(i, 1)).collect();
        assert_eq!(
            Universe::new(&input, &cand).unwrap_err(),
            MhcError::CapacityExceeded { len: 64 }
        );
        assert!(Universe::new(&input, &cand[..23]).is_ok());
    }
}

//! Set-based reference formulation, compiled for tests only.
//!
//! Restates the definition directly on coordinates with `BTreeSet` subsets and
//! brute-forces every candidate subset, independent of `PointSet` and the index.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::point::Point;

fn inside(k: Point, a: Point, b: Point) -> bool {
    a.x.min(b.x) <= k.x && k.x <= a.x.max(b.x) && a.y.min(b.y) <= k.y && k.y <= a.y.max(b.y)
}

pub(crate) fn is_connected(points: &[Point], subset: &BTreeSet<usize>) -> bool {
    let members: Vec<usize> = subset.iter().copied().collect();
    for (pos, &i) in members.iter().enumerate() {
        for &j in &members[pos + 1..] {
            let (a, b) = (points[i], points[j]);
            if a.x == b.x || a.y == b.y {
                continue;
            }
            let witnessed = members
                .iter()
                .any(|&k| k != i && k != j && inside(points[k], a, b));
            if !witnessed {
                return false;
            }
        }
    }
    true
}

/// Every candidate subset (as universe indices) that connects the input.
pub(crate) fn all_augmentations(input: &[Point], candidates: &[Point]) -> Vec<BTreeSet<usize>> {
    let n = input.len();
    let m = candidates.len();
    let points: Vec<Point> = input.iter().chain(candidates).copied().collect();
    let mut out = Vec::new();
    for bits in 0u32..(1 << m) {
        let chosen: BTreeSet<usize> = (0..m).filter(|c| bits >> c & 1 == 1).map(|c| n + c).collect();
        let subset: BTreeSet<usize> = (0..n).chain(chosen.iter().copied()).collect();
        if is_connected(&points, &subset) {
            out.push(chosen);
        }
    }
    out
}

pub(crate) fn min_augmentation_size(input: &[Point], candidates: &[Point]) -> Option<usize> {
    all_augmentations(input, candidates)
        .iter()
        .map(BTreeSet::len)
        .min()
}

/// Small grid points; duplicates are likely on purpose.
pub(crate) fn arb_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0i64..5, 0i64..5).prop_map(Point::from), 0..=max_len)
}

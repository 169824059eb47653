//! Solution codec: bit-vectors ↔ ordered point lists at the library boundary.
//!
//! `decode` only ever looks at candidate bits, so a full `input | chosen` mask
//! and the bare `chosen` mask decode to the same augmentation.

use crate::error::MhcError;
use crate::point::Point;
use crate::point_set::PointSet;
use crate::universe::Universe;

/// Candidate points of `mask`, in increasing index order.
pub fn decode(mask: PointSet, universe: &Universe) -> Vec<Point> {
    (mask & universe.candidate_mask())
        .iter()
        .map(|i| universe.point(i))
        .collect()
}

pub fn decode_all(masks: &[PointSet], universe: &Universe) -> Vec<Vec<Point>> {
    masks.iter().map(|&m| decode(m, universe)).collect()
}

/// Converse of [`decode`]. Each point claims the lowest unused candidate index
/// with equal coordinates, so duplicated candidates map one-for-one.
pub fn encode(points: &[Point], universe: &Universe) -> Result<PointSet, MhcError> {
    let mut mask = PointSet::empty();
    for &p in points {
        let slot = universe
            .candidate_range()
            .find(|&i| universe.point(i) == p && !mask.contains(i))
            .ok_or(MhcError::PointNotInUniverse { point: p })?;
        mask.insert(slot);
    }
    Ok(mask)
}

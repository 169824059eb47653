//! Errors surfaced at the library boundary.
//!
//! Domain outcomes (no augmentation within bounds, a cancelled search) are not
//! errors; they come back as regular results.

use std::fmt;

use crate::cfg::MAX_POINTS;
use crate::point::Point;

/// Errors raised before any index is built or any search begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MhcError {
    /// The universe holds more points than a `PointSet` can index.
    CapacityExceeded { len: usize },
    /// Size bounds or the solution cap are inconsistent with the candidate pool.
    InvalidBounds { reason: String },
    /// A point handed to the codec does not occur among the unused candidates.
    PointNotInUniverse { point: Point },
}

impl MhcError {
    pub(crate) fn bounds(reason: impl Into<String>) -> Self {
        Self::InvalidBounds {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MhcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MhcError::CapacityExceeded { len } => write!(
                f,
                "universe of {len} points exceeds the capacity of {MAX_POINTS}"
            ),
            MhcError::InvalidBounds { reason } => write!(f, "invalid search bounds: {reason}"),
            MhcError::PointNotInUniverse { point } => {
                write!(f, "point {point} is not an unused candidate of this universe")
            }
        }
    }
}

impl std::error::Error for MhcError {}

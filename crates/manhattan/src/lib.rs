//! Manhattan connectivity of small grid point sets, and minimum augmentation.
//!
//! A point set is Manhattan-connected when every pair of its points is aligned
//! (shares a row or a column) or has a third member inside their closed bounding
//! rectangle. Given fixed input points and a candidate pool, the search finds
//! the fewest candidates whose addition makes the input connected.
//!
//! Layout
//! - `point`, `point_set`, `universe`: the indexed data model (≤ 63 points).
//! - `witness`: pair witness index and the connectivity predicate.
//! - `search`: level search with exhaustive and branch-and-bound strategies.
//! - `codec`: bit-vectors ↔ point lists; `augment`: top-level operations.
//! - `instance`: seeded random grid instances.

pub mod api;
pub mod augment;
pub mod cfg;
pub mod codec;
pub mod error;
pub mod instance;
pub mod point;
pub mod point_set;
pub mod search;
pub mod universe;
pub mod witness;

#[cfg(test)]
mod oracle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use augment::{
    check_connectivity, find_minimum_augmentation, find_minimum_augmentation_with,
    solve_with_defaults, Augmentation,
};
pub use error::MhcError;
pub use point::Point;
pub use point_set::PointSet;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::augment::{
        check_connectivity, find_minimum_augmentation, find_minimum_augmentation_with,
        solve_with_defaults, Augmentation,
    };
    pub use crate::error::MhcError;
    pub use crate::instance::{draw_instance, GridCfg, Instance, ReplayToken};
    pub use crate::point::{points_from_tuples, Point};
    pub use crate::search::{Deadline, Direction, Interrupt, Never, SearchCfg, Strategy};
}

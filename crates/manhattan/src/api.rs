//! Curated surface for the CLI, benches and experiments.
//!
//! Lower-level pieces (index, predicate, raw search over masks) are exposed
//! here for callers that want to reuse one index across many queries.

// Data model
pub use crate::point::{points_from_tuples, Point};
pub use crate::point_set::PointSet;
pub use crate::universe::Universe;
// Index and predicate
pub use crate::witness::{Connectivity, PairWitnessIndex};
// Search
pub use crate::search::{
    search, Deadline, Direction, Interrupt, Never, SearchCfg, SearchOutcome, SearchStats,
    SizeBounds, Strategy,
};
// Boundary
pub use crate::codec::{decode, decode_all, encode};
pub use crate::augment::{
    check_connectivity, find_minimum_augmentation, find_minimum_augmentation_with,
    solve_with_defaults, Augmentation,
};
pub use crate::error::MhcError;
// Instances
pub use crate::instance::{draw_instance, GridCfg, Instance, InstanceError, ReplayToken};

//! Pair witness index and the Manhattan-connectivity predicate.
//!
//! Purpose
//! - Precompute, once per universe, which pairs are aligned (share a row or a
//!   column) and which points witness each remaining pair (lie in the closed
//!   bounding rectangle of the pair).
//! - Answer "is this subset Manhattan-connected?" with bit operations only.
//!
//! Layout
//! - `build.rs` holds the O(N³) construction, `connectivity.rs` the predicate.

mod build;
mod connectivity;

pub use build::PairWitnessIndex;
pub use connectivity::Connectivity;

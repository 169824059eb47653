//! Minimum augmenting-subset search.
//!
//! Purpose
//! - Given input points `P` and candidate points `C` indexed in one universe,
//!   find subsets `S ⊆ C` such that `P ∪ S` is Manhattan-connected, scanning
//!   subset sizes level by level and stopping at the first level with a solution.
//!
//! Why this design
//! - Two interchangeable strategies share one level loop and one result buffer,
//!   so both return the same list for the same config. The exhaustive scan is
//!   the reference; branch-and-bound is the default.
//!
//! Notes
//! - Solutions are full `input | chosen` masks; `codec::decode` maps them back
//!   to candidate points.
//! - Cancellation is cooperative via [`Interrupt`].

mod branch;
mod exhaustive;
mod interrupt;
mod types;

use std::ops::Range;

use crate::error::MhcError;
use crate::point_set::PointSet;
use crate::witness::{Connectivity, PairWitnessIndex};

pub use interrupt::{Deadline, Interrupt, Never};
pub use types::{Direction, SearchCfg, SearchOutcome, SearchStats, SizeBounds, Strategy};

use types::Collector;

/// Run the level search over `candidates` (a contiguous index range of `index`).
///
/// Requirements
/// - `candidates.end <= index.len()`;
/// - every member of `input` is below `candidates.start`.
///
/// Already-connected inputs are not special-cased here: with `min_size == 0`
/// the empty subset is the first solution found.
pub fn search<I: Interrupt + ?Sized>(
    index: &PairWitnessIndex,
    input: PointSet,
    candidates: Range<usize>,
    cfg: SearchCfg,
    interrupt: &I,
) -> Result<SearchOutcome, MhcError> {
    if candidates.start > candidates.end || candidates.end > index.len() {
        return Err(MhcError::bounds(format!(
            "candidate range {}..{} is outside the {}-point universe",
            candidates.start,
            candidates.end,
            index.len()
        )));
    }
    if !input.is_subset(PointSet::range(0, candidates.start)) {
        return Err(MhcError::bounds(
            "input points must precede the candidate range",
        ));
    }
    let m = candidates.len();
    let bounds = cfg.bounds(m)?;
    let conn = Connectivity::new(index);
    let unresolved = conn.unresolved_pairs(input);
    let mut out = Collector::new(bounds.limit);
    let mut size = None;

    for k in cfg.direction.sizes(bounds.min, bounds.max) {
        out.stats.levels += 1;
        match cfg.strategy {
            Strategy::Exhaustive => exhaustive::scan_level(
                conn,
                input,
                candidates.clone(),
                k,
                interrupt,
                &mut out,
            ),
            Strategy::BranchAndBound => branch::run_level(
                conn,
                input,
                &unresolved,
                candidates.clone(),
                k,
                interrupt,
                &mut out,
            ),
        }
        tracing::debug!(
            size = k,
            found = out.solutions.len(),
            nodes = out.stats.nodes,
            cancelled = out.cancelled,
            "size level scanned"
        );
        if !out.solutions.is_empty() {
            size = Some(k);
            break;
        }
        if out.cancelled {
            break;
        }
    }

    tracing::debug!(
        strategy = %cfg.strategy,
        direction = %cfg.direction,
        candidates = m,
        solutions = out.solutions.len(),
        levels = out.stats.levels,
        pruned = out.stats.pruned,
        cancelled = out.cancelled,
        "augmentation search finished"
    );
    Ok(SearchOutcome {
        solutions: out.solutions,
        size,
        cancelled: out.cancelled,
        stats: out.stats,
    })
}

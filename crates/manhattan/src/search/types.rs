//! Configuration and result types for the augmentation search.

use std::fmt;
use std::str::FromStr;

use crate::error::MhcError;
use crate::point_set::PointSet;

/// Order in which candidate subset sizes are scanned.
///
/// `Ascending` stops at the smallest size with a solution, so its result is a
/// minimum augmentation within the bounds. `Descending` stops at the largest
/// such size; it is a speed heuristic for dense pools and makes no minimality claim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub(crate) fn sizes(self, min: usize, max: usize) -> Vec<usize> {
        let mut sizes: Vec<usize> = (min..=max).collect();
        if self == Direction::Descending {
            sizes.reverse();
        }
        sizes
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        })
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(Direction::Ascending),
            "descending" | "desc" => Ok(Direction::Descending),
            other => Err(format!("unknown direction `{other}`")),
        }
    }
}

/// Enumeration strategy. Both return the same solutions for the same config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// All combinations per size, each tested with the full predicate.
    Exhaustive,
    /// Depth-first extension tracking unresolved pairs incrementally.
    #[default]
    BranchAndBound,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::BranchAndBound => "branch",
        })
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exhaustive" => Ok(Strategy::Exhaustive),
            "branch" | "bnb" | "branch-and-bound" => Ok(Strategy::BranchAndBound),
            other => Err(format!("unknown strategy `{other}`")),
        }
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    pub min_size: usize,
    /// `None` means every candidate may be chosen.
    pub max_size: Option<usize>,
    /// Solutions collected at the first successful size level.
    pub max_solutions: usize,
    pub direction: Direction,
    /// Only-one mode: return as soon as one solution is found.
    pub stop_at_first: bool,
    pub strategy: Strategy,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            min_size: 0,
            max_size: None,
            max_solutions: 10,
            direction: Direction::Ascending,
            stop_at_first: false,
            strategy: Strategy::BranchAndBound,
        }
    }
}

/// Bounds resolved against a concrete candidate count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeBounds {
    pub min: usize,
    pub max: usize,
    pub limit: usize,
}

impl SearchCfg {
    /// Validate against `m` candidates.
    pub fn bounds(&self, m: usize) -> Result<SizeBounds, MhcError> {
        let max = self.max_size.unwrap_or(m);
        if max > m {
            return Err(MhcError::bounds(format!(
                "max_size {max} exceeds the {m} available candidates"
            )));
        }
        if self.min_size > max {
            return Err(MhcError::bounds(format!(
                "min_size {} is greater than max_size {max}",
                self.min_size
            )));
        }
        if self.max_solutions == 0 {
            return Err(MhcError::bounds("max_solutions must be at least 1"));
        }
        let limit = if self.stop_at_first {
            1
        } else {
            self.max_solutions
        };
        Ok(SizeBounds {
            min: self.min_size,
            max,
            limit,
        })
    }
}

/// Work counters, mostly for benches and the CLI report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Size levels visited.
    pub levels: usize,
    /// Combinations generated (exhaustive) or branches expanded (branch-and-bound).
    pub nodes: u64,
    /// Subsets of the target size whose connectivity was decided.
    pub leaves: u64,
    /// Branches cut before reaching the target size.
    pub pruned: u64,
}

/// Result of one search call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Full `input | chosen` masks, in lexicographic order of the chosen indices.
    pub solutions: Vec<PointSet>,
    /// Candidate count of the returned solutions.
    pub size: Option<usize>,
    /// An interrupt cut the search short; `solutions` is what was collected so far.
    pub cancelled: bool,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.solutions.is_empty()
    }
}

/// Append-only result buffer threaded through one search.
#[derive(Debug)]
pub(crate) struct Collector {
    pub(crate) solutions: Vec<PointSet>,
    pub(crate) limit: usize,
    pub(crate) cancelled: bool,
    pub(crate) stats: SearchStats,
}

impl Collector {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            solutions: Vec::new(),
            limit,
            cancelled: false,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mask: PointSet) {
        self.solutions.push(mask);
    }

    #[inline]
    pub(crate) fn done(&self) -> bool {
        self.cancelled || self.solutions.len() >= self.limit
    }
}

//! Top-level operations: connectivity check and minimum augmentation.
//!
//! Each call builds its own universe and witness index, runs, and drops both.

use crate::codec;
use crate::error::MhcError;
use crate::point::Point;
use crate::point_set::PointSet;
use crate::search::{self, Interrupt, Never, SearchCfg, SearchStats};
use crate::universe::Universe;
use crate::witness::{Connectivity, PairWitnessIndex};

/// Result of [`find_minimum_augmentation`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Augmentation {
    /// Chosen candidate points per solution, in candidate order.
    pub solutions: Vec<Vec<Point>>,
    /// Number of candidates in each solution.
    pub size: Option<usize>,
    /// The input was connected on its own; the search did not run.
    pub already_connected: bool,
    pub cancelled: bool,
    pub stats: SearchStats,
}

impl Augmentation {
    pub fn found(&self) -> bool {
        !self.solutions.is_empty()
    }
}

/// Whether `points` is Manhattan-connected.
pub fn check_connectivity(points: &[Point]) -> Result<bool, MhcError> {
    let index = PairWitnessIndex::build(points)?;
    let all = PointSet::range(0, points.len());
    Ok(Connectivity::new(&index).is_connected(all))
}

/// Smallest (or first, per `cfg.direction`) candidate subsets that connect `input`.
///
/// An input that is connected on its own returns the empty augmentation
/// without searching, unless `cfg.min_size > 0`: then the search runs and
/// every solution holds at least `min_size` candidates.
pub fn find_minimum_augmentation(
    input: &[Point],
    candidates: &[Point],
    cfg: SearchCfg,
) -> Result<Augmentation, MhcError> {
    find_minimum_augmentation_with(input, candidates, cfg, &Never)
}

/// As [`find_minimum_augmentation`], polling `interrupt` during the search.
pub fn find_minimum_augmentation_with<I: Interrupt + ?Sized>(
    input: &[Point],
    candidates: &[Point],
    cfg: SearchCfg,
    interrupt: &I,
) -> Result<Augmentation, MhcError> {
    let universe = Universe::new(input, candidates)?;
    cfg.bounds(universe.n_candidates())?;
    let index = PairWitnessIndex::build(universe.points())?;

    let already_connected = Connectivity::new(&index).is_connected(universe.input_mask());
    if already_connected && cfg.min_size == 0 {
        tracing::debug!(points = input.len(), "input already connected");
        return Ok(Augmentation {
            solutions: vec![Vec::new()],
            size: Some(0),
            already_connected: true,
            ..Augmentation::default()
        });
    }

    let outcome = search::search(
        &index,
        universe.input_mask(),
        universe.candidate_range(),
        cfg,
        interrupt,
    )?;
    Ok(Augmentation {
        solutions: codec::decode_all(&outcome.solutions, &universe),
        size: outcome.size,
        already_connected,
        cancelled: outcome.cancelled,
        stats: outcome.stats,
    })
}

/// Default search over the given lists.
pub fn solve_with_defaults(input: &[Point], candidates: &[Point]) -> Result<Augmentation, MhcError> {
    find_minimum_augmentation(input, candidates, SearchCfg::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{draw_instance, GridCfg, ReplayToken};
    use crate::point::points_from_tuples;
    use crate::search::{Direction, Strategy};
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    #[test]
    fn capacity_boundary() {
        let line: Vec<Point> = (0..64).map(|i| Point::new(0, i)).collect();
        assert_eq!(check_connectivity(&line[..63]), Ok(true));
        assert_eq!(
            check_connectivity(&line),
            Err(MhcError::CapacityExceeded { len: 64 })
        );
        assert_eq!(
            find_minimum_augmentation(&line[..60], &line[..4], SearchCfg::default()),
            Err(MhcError::CapacityExceeded { len: 64 })
        );
    }

    #[test]
    fn empty_and_singleton_inputs_are_connected() {
        assert_eq!(check_connectivity(&[]), Ok(true));
        assert_eq!(check_connectivity(&[Point::new(4, -2)]), Ok(true));
    }

    #[test]
    fn corner_candidate_is_the_unique_solution() {
        let input = points_from_tuples(&[(0, 0), (1, 1)]);
        let cands = points_from_tuples(&[(1, 0)]);
        assert_eq!(check_connectivity(&input), Ok(false));
        let aug = solve_with_defaults(&input, &cands).unwrap();
        assert!(aug.found() && !aug.already_connected);
        assert_eq!(aug.size, Some(1));
        assert_eq!(aug.solutions, vec![vec![Point::new(1, 0)]]);
    }

    #[test]
    fn diagonal_triple_has_two_point_solutions() {
        let input = points_from_tuples(&[(0, 0), (1, 1), (2, 2)]);
        let cands = points_from_tuples(&[(1, 0), (0, 1), (2, 1), (1, 2)]);
        let aug = solve_with_defaults(&input, &cands).unwrap();
        assert_eq!(aug.size, Some(2));
        assert_eq!(aug.solutions.len(), 4);
        assert_eq!(aug.solutions[0], points_from_tuples(&[(1, 0), (2, 1)]));
        for sol in &aug.solutions {
            assert!(sol.iter().all(|p| !input.contains(p)));
            let mut union = input.clone();
            union.extend_from_slice(sol);
            assert_eq!(check_connectivity(&union), Ok(true));
        }
    }

    #[test]
    fn staircase_with_far_corners_is_not_connected() {
        // (0,6)-(1,1) spans [0,1]x[1,6]; no other listed point lies in it
        let input = points_from_tuples(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (0, 6), (6, 0)]);
        assert_eq!(check_connectivity(&input), Ok(false));
        let aug = solve_with_defaults(&input, &[]).unwrap();
        assert!(!aug.found() && !aug.already_connected);
        assert_eq!(aug.size, None);
    }

    #[test]
    fn connected_input_short_circuits() {
        let plus = points_from_tuples(&[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);
        let aug = solve_with_defaults(&plus, &points_from_tuples(&[(7, 7)])).unwrap();
        assert!(aug.already_connected && aug.found());
        assert_eq!(aug.solutions, vec![Vec::<Point>::new()]);
        assert_eq!(aug.size, Some(0));
        assert_eq!(aug.stats, SearchStats::default());
    }

    #[test]
    fn min_size_overrides_the_short_circuit() {
        let plus = points_from_tuples(&[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);
        let cands = points_from_tuples(&[(0, 0), (9, 9)]);
        let cfg = SearchCfg {
            min_size: 1,
            ..SearchCfg::default()
        };
        let aug = find_minimum_augmentation(&plus, &cands, cfg).unwrap();
        assert!(aug.already_connected);
        // (0,0) keeps the plus connected; (9,9)-(2,1) has no witness
        assert_eq!(aug.size, Some(1));
        assert_eq!(aug.solutions, vec![vec![Point::new(0, 0)]]);
        assert!(aug.stats.levels > 0);
    }

    #[test]
    fn bounds_are_checked_before_the_short_circuit() {
        let plus = points_from_tuples(&[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);
        let cfg = SearchCfg {
            max_size: Some(2),
            ..SearchCfg::default()
        };
        assert!(matches!(
            find_minimum_augmentation(&plus, &[Point::new(9, 9)], cfg),
            Err(MhcError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn descending_returns_a_valid_larger_solution() {
        let input = points_from_tuples(&[(0, 0), (1, 1), (2, 2)]);
        let cands = points_from_tuples(&[(1, 0), (0, 1), (2, 1), (1, 2)]);
        let cfg = SearchCfg {
            direction: Direction::Descending,
            max_solutions: 1,
            strategy: Strategy::Exhaustive,
            ..SearchCfg::default()
        };
        let aug = find_minimum_augmentation(&input, &cands, cfg).unwrap();
        assert_eq!(aug.size, Some(4));
        assert_eq!(aug.solutions, vec![cands.clone()]);
    }

    #[test]
    fn shared_flag_cancels() {
        let input = points_from_tuples(&[(0, 0), (1, 1)]);
        let cands = points_from_tuples(&[(1, 0)]);
        let flag = Arc::new(AtomicBool::new(true));
        let aug =
            find_minimum_augmentation_with(&input, &cands, SearchCfg::default(), &flag).unwrap();
        assert!(aug.cancelled && !aug.found());
    }

    #[test]
    fn sampled_instances_agree_across_strategies() {
        let grid = GridCfg {
            width: 6,
            height: 6,
            inputs: 4,
            candidates: 10,
        };
        for index in 0..12 {
            let inst = draw_instance(grid, ReplayToken::new(2024, index)).unwrap();
            let run = |strategy| {
                let cfg = SearchCfg {
                    strategy,
                    ..SearchCfg::default()
                };
                find_minimum_augmentation(&inst.input, &inst.candidates, cfg).unwrap()
            };
            let (ex, bnb) = (run(Strategy::Exhaustive), run(Strategy::BranchAndBound));
            assert_eq!(ex.solutions, bnb.solutions, "index {index}");
            assert_eq!(ex.size, bnb.size);
        }
    }
}

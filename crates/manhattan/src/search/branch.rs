//! Branch-and-bound with an incrementally maintained set of unresolved pairs.
//!
//! A node is a partial choice `input | chosen` (candidates added in strictly
//! increasing index order) plus the pairs of that mask that are not yet
//! connected. Adding candidate `c`:
//! - drops every unresolved pair that `c` witnesses,
//! - adds `(a, c)` for each member `a` that is neither aligned with `c` nor
//!   witnessed inside the new mask.
//!
//! Since earlier pairs can only gain witnesses, the frontier stays exact: a
//! mask of the target size is a solution iff its unresolved list is empty.
//!
//! Cuts
//! - too few candidates left to reach the target size;
//! - an unresolved pair with no witness among the candidates still to come.
//!
//! Neither cut removes a solution, so the result equals the exhaustive scan.

use std::ops::Range;

use crate::point_set::PointSet;
use crate::witness::Connectivity;

use super::interrupt::Interrupt;
use super::types::Collector;

type Pair = (usize, usize);

/// Depth-first runner for a single target size.
struct BranchRunner<'a, 'o, I: ?Sized> {
    conn: Connectivity<'a>,
    /// One past the last candidate index.
    end: usize,
    target: usize,
    interrupt: &'a I,
    out: &'o mut Collector,
}

/// Enumerate the size-`target` augmentations of `input` over `candidates`.
pub(crate) fn run_level<I: Interrupt + ?Sized>(
    conn: Connectivity<'_>,
    input: PointSet,
    unresolved: &[Pair],
    candidates: Range<usize>,
    target: usize,
    interrupt: &I,
    out: &mut Collector,
) {
    let mut runner = BranchRunner {
        conn,
        end: candidates.end,
        target,
        interrupt,
        out,
    };
    runner.recur(input, 0, candidates.start, unresolved.to_vec());
}

impl<I: Interrupt + ?Sized> BranchRunner<'_, '_, I> {
    fn recur(&mut self, mask: PointSet, chosen: usize, next: usize, unresolved: Vec<Pair>) {
        if chosen == self.target {
            self.out.stats.leaves += 1;
            if unresolved.is_empty() {
                self.out.push(mask);
            }
            return;
        }
        if chosen + (self.end - next) < self.target || self.has_dead_pair(&unresolved, next) {
            self.out.stats.pruned += 1;
            return;
        }
        for c in next..self.end {
            if self.out.done() {
                return;
            }
            if self.interrupt.interrupted() {
                self.out.cancelled = true;
                return;
            }
            self.out.stats.nodes += 1;
            let child_mask = mask.with(c);
            let child = self.extend(&unresolved, mask, c, child_mask);
            self.recur(child_mask, chosen + 1, c + 1, child);
        }
    }

    /// Frontier of `mask | {c}` from the frontier of `mask`.
    fn extend(&self, unresolved: &[Pair], mask: PointSet, c: usize, child_mask: PointSet) -> Vec<Pair> {
        let index = self.conn.index();
        let mut child: Vec<Pair> = unresolved
            .iter()
            .copied()
            .filter(|&(a, b)| !index.witness(a, b).contains(c))
            .collect();
        // input sits below every candidate, so `a < c`
        child.extend(
            mask.iter()
                .filter(|&a| !self.conn.pair_connected(a, c, child_mask))
                .map(|a| (a, c)),
        );
        child
    }

    /// Some pair can no longer be witnessed by candidates `next..end`.
    fn has_dead_pair(&self, unresolved: &[Pair], next: usize) -> bool {
        let remaining = PointSet::range(next, self.end);
        let index = self.conn.index();
        unresolved
            .iter()
            .any(|&(a, b)| !index.witness(a, b).intersects(remaining))
    }
}

//! Exhaustive-by-size: every combination of one size, full predicate per combination.

use std::ops::Range;

use itertools::Itertools;

use crate::point_set::PointSet;
use crate::witness::Connectivity;

use super::interrupt::Interrupt;
use super::types::Collector;

/// Scan all `C(m, k)` candidate combinations in lexicographic index order.
pub(crate) fn scan_level<I: Interrupt + ?Sized>(
    conn: Connectivity<'_>,
    input: PointSet,
    candidates: Range<usize>,
    k: usize,
    interrupt: &I,
    out: &mut Collector,
) {
    for combo in candidates.combinations(k) {
        if interrupt.interrupted() {
            out.cancelled = true;
            return;
        }
        out.stats.nodes += 1;
        let mask = combo.into_iter().fold(input, PointSet::with);
        out.stats.leaves += 1;
        if conn.is_connected(mask) {
            out.push(mask);
            if out.done() {
                return;
            }
        }
    }
}

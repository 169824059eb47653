//! Staircase timing probe: both strategies on growing diagonal staircases.
//!
//! Input points `(i, i)` for `1 ≤ i < n` plus the far corners `(0, n)` and
//! `(n, 0)`; candidates are the two step corners of each diagonal step and
//! the border cells `(i, n)`, `(n, i)`. Prints one line per run.

use std::time::{Duration, Instant};

use manhattan::api::{
    find_minimum_augmentation_with, Deadline, Point, SearchCfg, Strategy,
};

fn staircase(n: i64) -> (Vec<Point>, Vec<Point>) {
    let mut input: Vec<Point> = (1..n).map(|i| Point::new(i, i)).collect();
    input.extend([Point::new(0, n), Point::new(n, 0)]);
    let candidates = (1..n)
        .flat_map(|i| {
            [
                Point::new(i, i + 1),
                Point::new(i + 1, i),
                Point::new(i, n),
                Point::new(n, i),
            ]
        })
        .collect();
    (input, candidates)
}

fn main() {
    let budget = Duration::from_secs(20);
    for n in [4i64, 6, 8, 10] {
        let (input, candidates) = staircase(n);
        for strategy in [Strategy::BranchAndBound, Strategy::Exhaustive] {
            let cfg = SearchCfg {
                strategy,
                stop_at_first: true,
                ..SearchCfg::default()
            };
            let start = Instant::now();
            let aug = find_minimum_augmentation_with(&input, &candidates, cfg, &Deadline::after(budget))
                .expect("staircase stays within capacity");
            let ms = start.elapsed().as_secs_f64() * 1e3;
            println!(
                "n={n} points={} strategy={strategy} size={:?} cancelled={} nodes={} pruned={} ms={ms:.2}",
                input.len() + candidates.len(),
                aug.size,
                aug.cancelled,
                aug.stats.nodes,
                aug.stats.pruned,
            );
        }
    }
}

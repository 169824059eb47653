//! Criterion benches for the witness index and both search strategies.
//!
//! - index: O(N³) build at 20 and 63 points.
//! - search: exhaustive vs branch-and-bound on sampled grids and on the
//!   diagonal staircase (every adjacent step needs its own corner).
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use manhattan::api::{
    draw_instance, find_minimum_augmentation, GridCfg, PairWitnessIndex, Point, ReplayToken,
    SearchCfg, Strategy,
};

fn staircase(n: i64) -> (Vec<Point>, Vec<Point>) {
    let mut input: Vec<Point> = (1..n).map(|i| Point::new(i, i)).collect();
    input.push(Point::new(0, n));
    input.push(Point::new(n, 0));
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

fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");
    for total in [20usize, 63] {
        let grid = GridCfg {
            width: 12,
            height: 12,
            inputs: total / 3,
            candidates: total - total / 3,
        };
        let inst = draw_instance(grid, ReplayToken { seed: 5, index: 0 }).unwrap();
        let points: Vec<Point> = inst.input.iter().chain(&inst.candidates).copied().collect();
        group.bench_function(BenchmarkId::new("build", total), |b| {
            b.iter(|| PairWitnessIndex::build(&points).unwrap())
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);
    let grid = GridCfg {
        width: 8,
        height: 8,
        inputs: 6,
        candidates: 16,
    };
    let sampled: Vec<_> = (0..8)
        .map(|index| draw_instance(grid, ReplayToken { seed: 11, index }).unwrap())
        .collect();
    let (stair_in, stair_cand) = staircase(6);

    for strategy in [Strategy::Exhaustive, Strategy::BranchAndBound] {
        let cfg = SearchCfg {
            strategy,
            max_solutions: 1,
            ..SearchCfg::default()
        };
        group.bench_function(BenchmarkId::new("sampled8x8", strategy), |b| {
            b.iter(|| {
                for inst in &sampled {
                    find_minimum_augmentation(&inst.input, &inst.candidates, cfg).unwrap();
                }
            })
        });
        group.bench_function(BenchmarkId::new("staircase6", strategy), |b| {
            b.iter(|| find_minimum_augmentation(&stair_in, &stair_cand, cfg).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index, bench_search);
criterion_main!(benches);

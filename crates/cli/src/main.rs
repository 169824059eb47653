use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use manhattan::api::{
    draw_instance, find_minimum_augmentation_with, Connectivity, Deadline,
    Direction, GridCfg, Interrupt, Never, PairWitnessIndex, Point, PointSet, ReplayToken,
    SearchCfg, Strategy,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod grid;
mod io;

use io::InstanceFile;

#[derive(Parser)]
#[command(name = "manhattan-cli")]
#[command(about = "Manhattan-connectivity checks and minimum augmentation search")]
struct Cmd {
    /// Log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Report whether a point set is Manhattan-connected
    Check {
        #[command(flatten)]
        source: Source,
    },
    /// Search for the smallest candidate subsets connecting the input
    Solve {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        search: SearchArgs,
        /// Also print each solution drawn on the grid (stderr)
        #[arg(long)]
        render: bool,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a random instance on a grid
    Generate {
        #[arg(long, default_value_t = 8)]
        width: usize,
        #[arg(long, default_value_t = 8)]
        height: usize,
        #[arg(long, default_value_t = 6)]
        inputs: usize,
        #[arg(long, default_value_t = 14)]
        candidates: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Where points come from. `check` also accepts a bare point list.
#[derive(Args)]
struct Source {
    /// Instance JSON `{ "input": [[x, y], ...], "candidates": [...] }`
    #[arg(long, conflicts_with_all = ["grid", "points"])]
    instance: Option<PathBuf>,
    /// Text grid: `.` empty, `#` input, `o` candidate
    #[arg(long, conflicts_with = "points")]
    grid: Option<PathBuf>,
    /// JSON list of `[x, y]` pairs (input only)
    #[arg(long)]
    points: Option<PathBuf>,
}

#[derive(Args)]
struct SearchArgs {
    #[arg(long, default_value_t = 0)]
    min_size: usize,
    /// Defaults to the number of candidates
    #[arg(long)]
    max_size: Option<usize>,
    #[arg(long, default_value_t = 10)]
    max_solutions: usize,
    /// ascending | descending
    #[arg(long, default_value_t = Direction::Ascending)]
    direction: Direction,
    /// Return after the first solution
    #[arg(long)]
    stop_at_first: bool,
    /// branch | exhaustive
    #[arg(long, default_value_t = Strategy::BranchAndBound)]
    strategy: Strategy,
    /// Give up after this many milliseconds and report what was found
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl SearchArgs {
    fn cfg(&self) -> SearchCfg {
        SearchCfg {
            min_size: self.min_size,
            max_size: self.max_size,
            max_solutions: self.max_solutions,
            direction: self.direction,
            stop_at_first: self.stop_at_first,
            strategy: self.strategy,
        }
    }
}

/// Points loaded from any source, plus the grid size when known.
struct Loaded {
    input: Vec<Point>,
    candidates: Vec<Point>,
    dims: (usize, usize),
}

impl Source {
    fn load(&self) -> Result<Loaded> {
        if let Some(path) = &self.instance {
            let inst = io::read_instance(path)?;
            return Ok(Loaded {
                input: inst.input_points(),
                candidates: inst.candidate_points(),
                dims: (0, 0),
            });
        }
        if let Some(path) = &self.grid {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading grid {}", path.display()))?;
            let g = grid::parse(&text).with_context(|| format!("parsing grid {}", path.display()))?;
            return Ok(Loaded {
                input: g.input,
                candidates: g.candidates,
                dims: (g.height, g.width),
            });
        }
        if let Some(path) = &self.points {
            return Ok(Loaded {
                input: io::read_points(path)?,
                candidates: Vec::new(),
                dims: (0, 0),
            });
        }
        bail!("one of --instance, --grid or --points is required")
    }
}

#[derive(Serialize)]
struct CheckReport {
    connected: bool,
    points: usize,
    unresolved: Vec<[usize; 2]>,
}

#[derive(Serialize)]
struct StatsReport {
    levels: usize,
    nodes: u64,
    leaves: u64,
    pruned: u64,
}

#[derive(Serialize)]
struct SolveReport {
    found: bool,
    size: Option<usize>,
    already_connected: bool,
    cancelled: bool,
    strategy: String,
    direction: String,
    stats: StatsReport,
    solutions: Vec<Vec<[i64; 2]>>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Check { source } => check(&source),
        Action::Solve {
            source,
            search,
            render,
            out,
        } => solve(&source, &search, render, out),
        Action::Generate {
            width,
            height,
            inputs,
            candidates,
            seed,
            index,
            out,
        } => generate(
            GridCfg {
                width,
                height,
                inputs,
                candidates,
            },
            ReplayToken { seed, index },
            out,
        ),
    }
}

fn check(source: &Source) -> Result<()> {
    let loaded = source.load()?;
    // a grid or instance is checked as the union of all its points
    let points: Vec<Point> = loaded
        .input
        .iter()
        .chain(&loaded.candidates)
        .copied()
        .collect();
    let index = PairWitnessIndex::build(&points)?;
    let unresolved: Vec<[usize; 2]> = Connectivity::new(&index)
        .unresolved_pairs(PointSet::range(0, points.len()))
        .into_iter()
        .map(|(i, j)| [i, j])
        .collect();
    if let Some(&[i, j]) = unresolved.first() {
        tracing::info!(
            first = %points[i],
            second = %points[j],
            unresolved = unresolved.len(),
            "not connected"
        );
    }
    let report = CheckReport {
        connected: unresolved.is_empty(),
        points: points.len(),
        unresolved,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn solve(source: &Source, args: &SearchArgs, render: bool, out: Option<PathBuf>) -> Result<()> {
    let loaded = source.load()?;
    let cfg = args.cfg();
    tracing::info!(
        input = loaded.input.len(),
        candidates = loaded.candidates.len(),
        strategy = %cfg.strategy,
        direction = %cfg.direction,
        "solve"
    );
    let interrupt: Box<dyn Interrupt> = match args.timeout_ms {
        Some(ms) => Box::new(Deadline::after(Duration::from_millis(ms))),
        None => Box::new(Never),
    };
    let aug = find_minimum_augmentation_with(&loaded.input, &loaded.candidates, cfg, &*interrupt)?;
    if aug.cancelled {
        tracing::warn!(collected = aug.solutions.len(), "search interrupted by the deadline");
    }
    if render {
        for (k, sol) in aug.solutions.iter().enumerate() {
            let drawn = grid::render(&loaded.input, &loaded.candidates, sol, loaded.dims)?;
            eprintln!("solution {k}:\n{drawn}");
        }
    }
    let report = SolveReport {
        found: aug.found(),
        size: aug.size,
        already_connected: aug.already_connected,
        cancelled: aug.cancelled,
        strategy: cfg.strategy.to_string(),
        direction: cfg.direction.to_string(),
        stats: StatsReport {
            levels: aug.stats.levels,
            nodes: aug.stats.nodes,
            leaves: aug.stats.leaves,
            pruned: aug.stats.pruned,
        },
        solutions: aug.solutions.iter().map(|s| io::to_pairs(s)).collect(),
    };
    match out {
        Some(path) => io::write_json(&path, &report),
        None => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

fn generate(cfg: GridCfg, tok: ReplayToken, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(seed = tok.seed, index = tok.index, "generate");
    let inst = draw_instance(cfg, tok)?;
    let file = InstanceFile::from(&inst);
    match out {
        Some(path) => io::write_json(&path, &file),
        None => {
            println!("{}", serde_json::to_string_pretty(&file)?);
            Ok(())
        }
    }
}

//! Instance and point-list files (JSON) plus output helpers.

use anyhow::{Context, Result};
use manhattan::api::{Instance, Point};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk instance: `{ "input": [[x, y], ...], "candidates": [[x, y], ...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceFile {
    pub input: Vec<[i64; 2]>,
    #[serde(default)]
    pub candidates: Vec<[i64; 2]>,
}

impl InstanceFile {
    pub fn input_points(&self) -> Vec<Point> {
        to_points(&self.input)
    }

    pub fn candidate_points(&self) -> Vec<Point> {
        to_points(&self.candidates)
    }
}

impl From<&Instance> for InstanceFile {
    fn from(inst: &Instance) -> Self {
        Self {
            input: to_pairs(&inst.input),
            candidates: to_pairs(&inst.candidates),
        }
    }
}

pub fn to_points(pairs: &[[i64; 2]]) -> Vec<Point> {
    pairs.iter().map(|&[x, y]| Point::new(x, y)).collect()
}

pub fn to_pairs(points: &[Point]) -> Vec<[i64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub fn read_instance(path: &Path) -> Result<InstanceFile> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading instance {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing instance {}", path.display()))
}

/// A bare JSON list of `[x, y]` pairs.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading points {}", path.display()))?;
    let pairs: Vec<[i64; 2]> = serde_json::from_str(&text)
        .with_context(|| format!("parsing points {}", path.display()))?;
    Ok(to_points(&pairs))
}

/// Pretty-print `value` to `out`, creating parent directories as needed.
pub fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}

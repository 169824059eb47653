//! Text grids: `.` empty, `#` input, `o` candidate; row `r`, column `c` is `(r, c)`.

use anyhow::{bail, Result};
use manhattan::api::Point;

/// Points read from a grid, each list in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    pub height: usize,
    pub width: usize,
    pub input: Vec<Point>,
    pub candidates: Vec<Point>,
}

pub fn parse(text: &str) -> Result<Grid> {
    let mut grid = Grid::default();
    let rows: Vec<&str> = text.lines().map(str::trim_end).collect();
    // trailing blank lines are not rows
    let used = rows.iter().rposition(|r| !r.is_empty()).map_or(0, |k| k + 1);
    for (r, row) in rows[..used].iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            let p = Point::new(r as i64, c as i64);
            match ch {
                '.' => {}
                '#' => grid.input.push(p),
                'o' => grid.candidates.push(p),
                other => bail!("unexpected `{other}` at row {r}, column {c}"),
            }
        }
        grid.width = grid.width.max(row.chars().count());
    }
    grid.height = used;
    Ok(grid)
}

/// Largest grid `render` will draw.
pub const MAX_RENDER_CELLS: u64 = 1 << 20;

/// Draw `input` as `#`, `chosen` as `*`, other candidates as `o`.
///
/// The grid covers `0..=max` on both axes, grown to at least `min_dims`, and
/// may hold at most [`MAX_RENDER_CELLS`] cells.
pub fn render(
    input: &[Point],
    candidates: &[Point],
    chosen: &[Point],
    min_dims: (usize, usize),
) -> Result<String> {
    let all = || input.iter().chain(candidates).chain(chosen);
    if let Some(p) = all().find(|p| p.x < 0 || p.y < 0) {
        bail!("cannot render negative coordinate {p}");
    }
    // coordinates are non-negative here, so `+ 1` cannot overflow in u64
    let extent = |coord: fn(&Point) -> i64, floor: usize| {
        all().map(|p| coord(p) as u64 + 1).max().unwrap_or(0).max(floor as u64)
    };
    let (rows, cols) = (extent(|p| p.x, min_dims.0), extent(|p| p.y, min_dims.1));
    match rows.checked_mul(cols) {
        Some(area) if area <= MAX_RENDER_CELLS => {}
        _ => bail!("a {rows}x{cols} grid is too large to render (limit {MAX_RENDER_CELLS} cells)"),
    }
    let (height, width) = (rows as usize, cols as usize);
    let mut cells = vec![vec!['.'; width]; height];
    let mut mark = |points: &[Point], ch: char| {
        for p in points {
            cells[p.x as usize][p.y as usize] = ch;
        }
    };
    mark(candidates, 'o');
    mark(chosen, '*');
    mark(input, '#');
    let mut out = String::with_capacity(height * (width + 1));
    for row in cells {
        out.extend(row);
        out.push('\n');
    }
    Ok(out)
}

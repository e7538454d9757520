//! Shared pieces of the `gridpath` command-line driver: loading or
//! generating a grid, running one search, and summarizing the result.

use std::fmt;

use gridpath_core::{Grid, Layout, Point};
use gridpath_paths::{PathNode, PathRange, SearchConfig, SearchError};
use rand::Rng;
use serde::Serialize;

/// Parse a `WIDTHxHEIGHT` size such as `40x20`.
pub fn parse_size(s: &str) -> Result<Point, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got \u{201c}{s}\u{201d}"))?;
    let w: i32 = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let h: i32 = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    if w <= 0 || h <= 0 {
        return Err(format!("size must be positive, got {w}x{h}"));
    }
    Ok(Point::new(w, h))
}

/// Parse a wall density: a finite number in `[0, 1]`.
pub fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.trim().parse().map_err(|e| format!("bad density: {e}"))?;
    if !(0.0..=1.0).contains(&d) {
        return Err(format!("density must be within [0, 1], got {d}"));
    }
    Ok(d)
}

/// Generate a grid of the given size where each cell is a wall with
/// probability `density`. Start and finish are placed on distinct random
/// cells (when the grid has more than one) and are never walls.
///
/// `density` is clamped to `[0, 1]`; NaN counts as 0.
pub fn random_grid<R: Rng>(rng: &mut R, size: Point, density: f64) -> Grid {
    let mut grid = Grid::new(size.x, size.y);
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    // Every point below comes from grid.bounds(), so the checked setters
    // cannot fail.
    let cells: Vec<Point> = grid.bounds().iter().collect();
    for &p in &cells {
        if rng.random_bool(density) {
            let _ = grid.set_wall(p, true);
        }
    }

    let Some(&start) = cells.get(rng.random_range(0..cells.len().max(1))) else {
        return grid;
    };
    let mut finish = start;
    if cells.len() > 1 {
        while finish == start {
            finish = cells[rng.random_range(0..cells.len())];
        }
    }
    for p in [start, finish] {
        let _ = grid.set_wall(p, false);
    }
    let _ = grid.set_start(start);
    let _ = grid.set_finish(finish);
    grid
}

/// Outcome of one search, ready to print or serialize.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub finish: Point,
    pub reached: bool,
    pub settled: Vec<PathNode>,
    pub path: Vec<Point>,
    pub cost: Option<f64>,
}

/// Search `grid` between its start and finish markers.
pub fn run(grid: &Grid, config: SearchConfig) -> Result<Report, SearchError> {
    let mut pr = PathRange::with_config(grid.bounds(), config)?;
    pr.search_grid(grid)?;
    let start = grid.start().ok_or(SearchError::MissingStart)?;
    let finish = grid.finish().ok_or(SearchError::MissingFinish)?;

    let reached = pr.visited_at(finish);
    let path = pr.reconstruct(finish);
    let cost = reached.then(|| pr.path_cost(&path));
    log::info!(
        "settled {} of {} cells, finish {}",
        pr.settled().len(),
        grid.len(),
        if reached { "reached" } else { "unreachable" }
    );

    Ok(Report {
        width: grid.width(),
        height: grid.height(),
        start,
        finish,
        reached,
        settled: pr.settled_nodes().collect(),
        path,
        cost,
    })
}

impl Report {
    /// Settled order as `row,col` pairs, one line.
    pub fn order_line(&self) -> String {
        join(self.settled.iter().map(|n| n.pos))
    }
}

fn join(points: impl Iterator<Item = Point>) -> String {
    points
        .map(|p| format!("{},{}", p.row(), p.col()))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "grid {}x{}, start {},{}, finish {},{}",
            self.width,
            self.height,
            self.start.row(),
            self.start.col(),
            self.finish.row(),
            self.finish.col()
        )?;
        writeln!(f, "settled {} cells", self.settled.len())?;
        match self.cost {
            Some(cost) => write!(
                f,
                "path {} cells, cost {cost:.1}: {}",
                self.path.len(),
                join(self.path.iter().copied())
            ),
            None => f.write_str("finish unreachable"),
        }
    }
}

/// Load a grid from layout text.
pub fn load(text: &str) -> Result<Grid, Box<dyn std::error::Error>> {
    Ok(Layout::new(text)?.to_grid())
}

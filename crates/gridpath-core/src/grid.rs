//! The [`Grid`] type — a fixed-size, row-major matrix of [`Cell`]s.
//!
//! A grid owns only static data: walls and the start/finish markers. It has
//! no search behavior of its own.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// A rectangular grid of [`Cell`]s with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Point>,
    finish: Option<Point>,
}

impl Grid {
    /// Create a new grid of the given dimensions with no walls and no
    /// start/finish markers. Negative sizes are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: bounds.iter().map(Cell::new).collect(),
            bounds,
            start: None,
            finish: None,
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
    }

    /// Inverse of [`index`](Grid::index). `idx` must be below [`len`](Grid::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.bounds.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Read the cell at `p`. Returns `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is a wall. Out-of-bounds points are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.is_wall)
    }

    /// Set or clear the wall at `p`.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.cells[i].is_wall = wall;
        Ok(())
    }

    /// Flip the wall flag at `p` and return the new value.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, GridError> {
        let i = self.checked_index(p)?;
        let cell = &mut self.cells[i];
        cell.is_wall = !cell.is_wall;
        Ok(cell.is_wall)
    }

    /// Mark `p` as the start cell, clearing any previous start.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        if let Some(old) = self.start.and_then(|s| self.index(s)) {
            self.cells[old].is_start = false;
        }
        self.cells[i].is_start = true;
        self.start = Some(p);
        Ok(())
    }

    /// Mark `p` as the finish cell, clearing any previous finish.
    pub fn set_finish(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        if let Some(old) = self.finish.and_then(|f| self.index(f)) {
            self.cells[old].is_finish = false;
        }
        self.cells[i].is_finish = true;
        self.finish = Some(p);
        Ok(())
    }

    /// The current start cell, if one has been set.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The current finish cell, if one has been set.
    #[inline]
    pub fn finish(&self) -> Option<Point> {
        self.finish
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Cell)> + '_ {
        self.cells.iter().map(|c| (c.pos, *c))
    }

    fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }
}

/// Unchecked field layout of a serialized [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Point>,
    finish: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        let GridRepr {
            cells,
            bounds,
            start,
            finish,
        } = repr;
        if bounds.min != Point::ZERO || bounds.max.x < 0 || bounds.max.y < 0 {
            return Err(GridError::Inconsistent(format!(
                "bounds {bounds} must start at {}",
                Point::ZERO
            )));
        }
        if cells.len() != bounds.len() {
            return Err(GridError::Inconsistent(format!(
                "{} cells for bounds {bounds} ({} expected)",
                cells.len(),
                bounds.len()
            )));
        }
        if let Some((c, p)) = cells.iter().zip(bounds.iter()).find(|(c, p)| c.pos != *p) {
            return Err(GridError::Inconsistent(format!(
                "cell at {} stored in slot of {p}",
                c.pos
            )));
        }
        check_marker("start", start, cells.iter().filter(|c| c.is_start))?;
        check_marker("finish", finish, cells.iter().filter(|c| c.is_finish))?;
        Ok(Self {
            cells,
            bounds,
            start,
            finish,
        })
    }
}

/// The marker must be held by exactly the cell it names, or by none.
#[cfg(feature = "serde")]
fn check_marker<'a>(
    name: &str,
    marker: Option<Point>,
    mut holders: impl Iterator<Item = &'a Cell>,
) -> Result<(), GridError> {
    let first = holders.next().map(|c| c.pos);
    if first != marker || holders.next().is_some() {
        return Err(GridError::Inconsistent(format!(
            "{name} marker does not match the cell flags"
        )));
    }
    Ok(())
}

/// Errors returned by checked [`Grid`] mutations and by deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The point lies outside the grid.
    OutOfBounds { pos: Point, bounds: Range },
    /// Serialized grid data breaks a grid invariant.
    Inconsistent(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "grid: point {pos} is outside {bounds}")
            }
            Self::Inconsistent(msg) => write!(f, "grid: inconsistent data: {msg}"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_and_at() {
        let g = Grid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.len(), 12);
        let c = g.at(Point::new(2, 1)).unwrap();
        assert_eq!(c.pos, Point::new(2, 1));
        assert_eq!((c.row(), c.col()), (1, 2));
        assert!(!c.is_wall);
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
    }

    #[test]
    fn index_round_trips() {
        let g = Grid::new(5, 3);
        for (i, p) in g.bounds().iter().enumerate() {
            assert_eq!(g.index(p), Some(i));
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.index(Point::new(5, 0)), None);
    }

    #[test]
    fn iter_is_row_major() {
        let g = Grid::new(3, 2);
        let pts: Vec<Point> = g.iter().map(|(p, _)| p).collect();
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[2], Point::new(2, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert!(g.iter().all(|(p, c)| p == c.pos));
    }

    #[test]
    fn walls_set_and_toggle() {
        let mut g = Grid::new(3, 3);
        let p = Point::new(1, 1);
        g.set_wall(p, true).unwrap();
        assert!(g.is_wall(p));
        assert_eq!(g.toggle_wall(p), Ok(false));
        assert!(!g.is_wall(p));
        assert_eq!(g.toggle_wall(p), Ok(true));
        assert_eq!(g.wall_count(), 1);
        assert!(!g.is_wall(Point::new(9, 9)));
    }

    #[test]
    fn out_of_bounds_mutation_errors() {
        let mut g = Grid::new(2, 2);
        let err = g.set_wall(Point::new(2, 0), true).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                pos: Point::new(2, 0),
                bounds: Range::new(0, 0, 2, 2),
            }
        );
        assert!(g.set_start(Point::new(-1, 0)).is_err());
        assert!(g.set_finish(Point::new(0, 5)).is_err());
        assert_eq!(g.start(), None);
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn start_and_finish_are_single_holder() {
        let mut g = Grid::new(3, 3);
        g.set_start(Point::new(0, 0)).unwrap();
        g.set_start(Point::new(1, 0)).unwrap();
        g.set_finish(Point::new(2, 2)).unwrap();
        g.set_finish(Point::new(2, 1)).unwrap();

        assert_eq!(g.start(), Some(Point::new(1, 0)));
        assert_eq!(g.finish(), Some(Point::new(2, 1)));
        assert_eq!(g.iter().filter(|(_, c)| c.is_start).count(), 1);
        assert_eq!(g.iter().filter(|(_, c)| c.is_finish).count(), 1);
        assert!(!g.at(Point::new(0, 0)).unwrap().is_start);
        assert!(g.at(Point::new(2, 1)).unwrap().is_finish);
    }

    #[test]
    fn negative_size_is_empty() {
        let g = Grid::new(-3, 4);
        assert!(g.is_empty());
        assert_eq!(g.iter().count(), 0);
    }
}

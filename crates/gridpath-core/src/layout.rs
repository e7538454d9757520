//! Grids described as ASCII art.
//!
//! A [`Layout`] parses text such as
//!
//! ```text
//! S..#
//! .#.#
//! ...F
//! ```
//!
//! where `#` is a wall, `.` is floor, `S` is the start and `F` the finish.
//! Lines are separated by `'\n'` and must all have the same width.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;
use crate::grid::Grid;

pub const WALL: char = '#';
pub const FLOOR: char = '.';
pub const START: char = 'S';
pub const FINISH: char = 'F';

/// A validated grid layout in text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    content: String,
    size: Point,
}

impl Layout {
    /// Parse and validate a layout.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string, and a
    /// trailing `'\r'` is stripped from each line. At most one `S` and one
    /// `F` may appear.
    pub fn new(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut width: Option<i32> = None;
        let mut height: i32 = 0;
        let mut content = String::with_capacity(s.len());
        let mut start: Option<Point> = None;
        let mut finish: Option<Point> = None;

        for (y, line) in s.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let y = y as i32;
            let mut x: i32 = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y);
                match ch {
                    WALL | FLOOR => {}
                    START => mark(&mut start, ch, pos)?,
                    FINISH => mark(&mut finish, ch, pos)?,
                    _ => {
                        return Err(LayoutError::InvalidRune {
                            ch,
                            pos,
                            content: s.to_string(),
                        });
                    }
                }
                x += 1;
            }
            match width {
                Some(w) if w != x => return Err(LayoutError::InconsistentSize(s.to_string())),
                _ => width = Some(x),
            }
            if y > 0 {
                content.push('\n');
            }
            content.push_str(line);
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            height = 0;
        }
        Ok(Self {
            content,
            size: Point::new(width, height),
        })
    }

    /// Return the layout's textual content (normalized line endings).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Return the (width, height) size of the layout in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    /// Iterate over all positions and their characters.
    pub fn iter(&self, mut f: impl FnMut(Point, char)) {
        for (y, line) in self.content.split('\n').enumerate() {
            for (x, ch) in line.chars().enumerate() {
                f(Point::new(x as i32, y as i32), ch);
            }
        }
    }

    /// Build the [`Grid`] this layout describes.
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::new(self.size.x, self.size.y);
        // Positions come from the validated content, so every mutation is in
        // bounds.
        self.iter(|p, ch| {
            let _ = match ch {
                WALL => grid.set_wall(p, true),
                START => grid.set_start(p),
                FINISH => grid.set_finish(p),
                _ => Ok(()),
            };
        });
        grid
    }

    /// Render a grid back into layout text.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut content = String::with_capacity(grid.len() + grid.height().max(0) as usize);
        for (p, cell) in grid.iter() {
            if p.x == 0 && p.y > 0 {
                content.push('\n');
            }
            content.push(if cell.is_wall {
                WALL
            } else if cell.is_start {
                START
            } else if cell.is_finish {
                FINISH
            } else {
                FLOOR
            });
        }
        Self {
            content,
            size: grid.size(),
        }
    }
}

fn mark(slot: &mut Option<Point>, ch: char, pos: Point) -> Result<(), LayoutError> {
    if let Some(first) = *slot {
        return Err(LayoutError::DuplicateMarker {
            ch,
            first,
            second: pos,
        });
    }
    *slot = Some(pos);
    Ok(())
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl FromStr for Grid {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Layout::new(s)?.to_grid())
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character other than `#`, `.`, `S` or `F` was found.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
    /// `S` or `F` appears more than once.
    DuplicateMarker { ch: char, first: Point, second: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => {
                write!(
                    f,
                    "layout contains invalid rune \u{201c}{ch}\u{201d} at ({}, {}):\n{content}",
                    pos.x, pos.y
                )
            }
            Self::DuplicateMarker { ch, first, second } => {
                write!(f, "layout: marker \u{201c}{ch}\u{201d} at {first} and {second}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

//! The [`Cell`] type — one position of a [`Grid`](crate::Grid).

use crate::geom::Point;

/// A grid cell: its fixed position plus the static flags an editor toggles.
///
/// Search results (distance, visited, predecessor) are not stored here; they
/// live in the per-run state table of the search engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub is_wall: bool,
    pub is_start: bool,
    pub is_finish: bool,
}

impl Cell {
    /// A floor cell at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            is_wall: false,
            is_start: false,
            is_finish: false,
        }
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.x
    }
}

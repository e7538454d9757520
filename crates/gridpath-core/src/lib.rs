//! **gridpath-core** — the grid model for weighted grid path search.
//!
//! This crate provides the static data the search engine reads: geometry
//! primitives, the [`Cell`] record, the fixed-size [`Grid`], and the
//! ASCII [`Layout`] format used to describe grids in tests and tools.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::{Grid, GridError};
pub use layout::{Layout, LayoutError};

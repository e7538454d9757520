//! Weighted shortest-path search on 2D grids with obstacles.
//!
//! The engine is a Dijkstra variant over an 8-connected grid (orthogonal
//! steps cost `1.0`, diagonal steps `1.4` by default). A search produces two
//! things:
//!
//! - the **settled order**: every cell in the order its distance was
//!   finalized, suitable for animating or diagnosing a run
//!   ([`PathRange::search`]);
//! - **predecessors** for every reached cell, from which the optimal path is
//!   rebuilt ([`PathRange::reconstruct`]).
//!
//! All per-run state lives in [`PathRange`], never in the grid. A
//! `PathRange` refuses to search again until it is [`reset`](PathRange::reset).
//!
//! ```
//! use gridpath_core::{Grid, Point};
//! use gridpath_paths::PathRange;
//!
//! let grid = Grid::new(3, 3);
//! let mut pr = PathRange::new(grid.bounds());
//! let order = pr.search(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(order.last(), Some(&Point::new(2, 2)));
//! assert_eq!(
//!     pr.reconstruct(Point::new(2, 2)),
//!     vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
//! );
//! ```

mod config;
mod dijkstra;
mod distance;
mod error;
mod neighbors;
mod path;
mod pathrange;
mod traits;

pub use config::SearchConfig;
pub use distance::{chebyshev, manhattan};
pub use error::SearchError;
pub use neighbors::{DIAGONAL, GridPather, ORTHOGONAL};
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use traits::WeightedPather;

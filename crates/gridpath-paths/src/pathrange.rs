use gridpath_core::{Point, Range};

use crate::config::SearchConfig;
use crate::error::SearchError;

/// A settled position with its final distance from the start.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: f64,
}

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: f64 = f64::INFINITY;

// ---------------------------------------------------------------------------
// Per-cell search state
// ---------------------------------------------------------------------------

/// Engine-owned state of one cell for the current run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Node {
    pub(crate) distance: f64,
    pub(crate) visited: bool,
    pub(crate) prev: Option<Point>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            distance: UNREACHABLE,
            visited: false,
            prev: None,
        }
    }
}

/// Frontier entry, ordered for use in `BinaryHeap`.
///
/// The key is `(dist, step, idx)`: among equal distances the cell relaxed
/// by an earlier settle wins, then the lower row-major index.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) dist: f64,
    pub(crate) step: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.step.cmp(&self.step))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Shortest-path engine for one grid rectangle.
///
/// `PathRange` owns the per-run state table (distance, visited flag and
/// predecessor of every cell) and the settled-order buffer. The table must
/// be cleared with [`reset`](PathRange::reset) between runs: a second
/// [`search`](PathRange::search) on dirty state fails with
/// [`SearchError::StaleState`]. Buffers are reused across runs.
#[derive(Debug, Clone)]
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<Node>,
    pub(crate) settled: Vec<Point>,
    pub(crate) dirty: bool,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle with the
    /// default [`SearchConfig`].
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            config: SearchConfig::default(),
            nodes: vec![Node::default(); len],
            settled: Vec::new(),
            dirty: false,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Create a `PathRange` with custom edge weights.
    pub fn with_config(rng: Range, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let mut pr = Self::new(rng);
        pr.config = config;
        Ok(pr)
    }

    /// Replace the underlying range. The state table is resized and reset.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.nodes.clear();
        self.nodes.resize(rng.len(), Node::default());
        self.settled.clear();
        self.dirty = false;
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Clear distance, visited and predecessor of every cell, and the
    /// settled order.
    pub fn reset(&mut self) {
        self.nodes.fill(Node::default());
        self.settled.clear();
        self.dirty = false;
    }

    /// Whether the state table is ready for a new search.
    #[inline]
    pub fn is_fresh(&self) -> bool {
        !self.dirty
    }

    // -----------------------------------------------------------------------
    // Read-back of the last run
    // -----------------------------------------------------------------------

    /// Cells in the order the last search settled them.
    #[inline]
    pub fn settled(&self) -> &[Point] {
        &self.settled
    }

    /// Settled cells paired with their final distances.
    pub fn settled_nodes(&self) -> impl ExactSizeIterator<Item = PathNode> + '_ {
        self.settled.iter().map(|&pos| PathNode {
            pos,
            cost: self.distance_at(pos),
        })
    }

    /// Distance of `p` from the start. Returns [`UNREACHABLE`] if `p` was
    /// not reached or is outside the range.
    pub fn distance_at(&self, p: Point) -> f64 {
        self.idx(p).map_or(UNREACHABLE, |i| self.nodes[i].distance)
    }

    /// Whether `p` was settled by the last search.
    pub fn visited_at(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.nodes[i].visited)
    }

    /// Predecessor of `p` on its shortest-known path.
    pub fn prev_at(&self, p: Point) -> Option<Point> {
        self.idx(p).and_then(|i| self.nodes[i].prev)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    pub(crate) fn checked_idx(&self, p: Point) -> Result<usize, SearchError> {
        self.idx(p).ok_or(SearchError::OutOfBounds {
            pos: p,
            bounds: self.rng,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn new_state_is_fresh_and_unreached() {
        let pr = PathRange::new(Range::new(0, 0, 4, 3));
        assert!(pr.is_fresh());
        assert_eq!(pr.nodes.len(), 12);
        assert_eq!(pr.distance_at(Point::new(3, 2)), UNREACHABLE);
        assert!(!pr.visited_at(Point::new(0, 0)));
        assert_eq!(pr.prev_at(Point::new(1, 1)), None);
        assert_eq!(pr.distance_at(Point::new(4, 0)), UNREACHABLE);
        assert!(pr.settled().is_empty());
    }

    #[test]
    fn idx_and_point_round_trip() {
        let pr = PathRange::new(Range::new(2, 1, 6, 4));
        for (i, p) in pr.range().iter().enumerate() {
            assert_eq!(pr.idx(p), Some(i));
            assert_eq!(pr.point(i), p);
        }
        assert_eq!(pr.idx(Point::new(0, 0)), None);
    }

    #[test]
    fn set_range_resizes_and_resets() {
        let mut pr = PathRange::new(Range::new(0, 0, 5, 5));
        pr.dirty = true;
        pr.nodes[3].distance = 2.0;
        let small = Range::new(0, 0, 2, 3);
        pr.set_range(small);
        assert_eq!(pr.range(), small);
        assert_eq!(pr.width, 2);
        assert_eq!(pr.nodes.len(), 6);
        assert!(pr.is_fresh());
        assert!(pr.nodes.iter().all(|n| *n == Node::default()));
    }

    #[test]
    fn with_config_validates() {
        let rng = Range::new(0, 0, 2, 2);
        let bad = SearchConfig {
            diagonal_cost: -1.0,
            ..SearchConfig::default()
        };
        assert!(PathRange::with_config(rng, bad).is_err());
        let pr = PathRange::with_config(rng, SearchConfig::orthogonal()).unwrap();
        assert!(!pr.config().allow_diagonal);
    }

    #[test]
    fn frontier_pops_by_distance_then_step_then_index() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 1, dist: 2.0, step: 3 });
        heap.push(NodeRef { idx: 9, dist: 2.0, step: 2 });
        heap.push(NodeRef { idx: 4, dist: 1.4, step: 5 });
        heap.push(NodeRef { idx: 0, dist: 2.0, step: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|n| n.idx).collect();
        assert_eq!(order, vec![4, 9, 0, 1]);
    }
}

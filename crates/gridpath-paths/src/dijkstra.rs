use std::collections::BinaryHeap;

use gridpath_core::{Grid, Point};

use crate::PathRange;
use crate::error::SearchError;
use crate::neighbors::GridPather;
use crate::pathrange::{NodeRef, UNREACHABLE};
use crate::traits::WeightedPather;

impl PathRange {
    /// Run a shortest-path search on `grid` from `start` to `finish`.
    ///
    /// Returns the cells in the order they were settled. The start distance
    /// is set to 0 by the search itself. If `finish` is reached it is the
    /// last element; if it is unreachable the result is the whole reachable
    /// component without it. Distances and predecessors are left in the
    /// state table for [`reconstruct`](PathRange::reconstruct) and the
    /// `*_at` accessors.
    ///
    /// The state table must be fresh (see [`reset`](PathRange::reset)).
    pub fn search(
        &mut self,
        grid: &Grid,
        start: Point,
        finish: Point,
    ) -> Result<&[Point], SearchError> {
        if grid.bounds() != self.rng {
            return Err(SearchError::SizeMismatch {
                expected: self.rng,
                found: grid.bounds(),
            });
        }
        let pather = GridPather::new(grid, self.config);
        self.search_with(&pather, start, finish)
    }

    /// Like [`search`](PathRange::search), reading start and finish from the
    /// grid's markers.
    pub fn search_grid(&mut self, grid: &Grid) -> Result<&[Point], SearchError> {
        let start = grid.start().ok_or(SearchError::MissingStart)?;
        let finish = grid.finish().ok_or(SearchError::MissingFinish)?;
        self.search(grid, start, finish)
    }

    /// [`reset`](PathRange::reset) followed by [`search`](PathRange::search).
    pub fn search_fresh(
        &mut self,
        grid: &Grid,
        start: Point,
        finish: Point,
    ) -> Result<&[Point], SearchError> {
        self.reset();
        self.search(grid, start, finish)
    }

    /// Run the search over an arbitrary [`WeightedPather`].
    ///
    /// Each cell is relaxed at most once: a neighbor's distance is assigned
    /// only while it is still [`UNREACHABLE`] and is never lowered
    /// afterwards. Ties on distance go to the cell relaxed earlier, then to
    /// the lower row-major index.
    ///
    /// Edge costs must be finite and positive. Other costs are a bug in the
    /// pather: debug builds panic on them, release builds settle cells in an
    /// unspecified order.
    pub fn search_with<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: Point,
        finish: Point,
    ) -> Result<&[Point], SearchError> {
        let start_idx = self.checked_idx(start)?;
        let finish_idx = self.checked_idx(finish)?;
        if self.dirty {
            log::warn!("search from {start} refused: state not reset since last run");
            return Err(SearchError::StaleState);
        }
        self.dirty = true;

        log::debug!(
            "search {start} -> {finish} over {} ({} cells)",
            self.rng,
            self.nodes.len()
        );

        self.nodes[start_idx].distance = 0.0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            dist: 0.0,
            step: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut step: u32 = 0;

        // Only reached cells enter the heap, so an empty heap means every
        // remaining cell is unreachable.
        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cp = self.point(ci);
            if pather.blocked(cp) {
                continue;
            }

            let node = &mut self.nodes[ci];
            node.visited = true;
            let current_dist = node.distance;
            self.settled.push(cp);
            log::trace!("settled {cp} at {current_dist}");

            if ci == finish_idx {
                break;
            }

            step += 1;
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.visited || n.distance != UNREACHABLE {
                    continue;
                }
                let cost = pather.cost(cp, np);
                debug_assert!(
                    cost.is_finite() && cost > 0.0,
                    "edge cost {cost} from {cp} to {np} must be finite and positive"
                );
                n.distance = current_dist + cost;
                n.prev = Some(cp);
                open.push(NodeRef {
                    idx: ni,
                    dist: n.distance,
                    step,
                });
            }
        }

        self.nbuf = nbuf;
        log::debug!(
            "search settled {} cells, finish {}",
            self.settled.len(),
            if self.nodes[finish_idx].visited {
                "reached"
            } else {
                "unreachable"
            }
        );
        Ok(&self.settled)
    }
}

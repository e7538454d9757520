use gridpath_core::Point;

/// Weighted neighbor enumeration used by [`PathRange::search_with`](crate::PathRange::search_with).
pub trait WeightedPather {
    /// Append the passable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Cost of moving from `from` to adjacent `to`. Must be finite and > 0;
    /// debug builds of the search panic otherwise.
    fn cost(&self, from: Point, to: Point) -> f64;

    /// Whether `p` can never be settled. A blocked start cell makes the
    /// search settle nothing.
    fn blocked(&self, _p: Point) -> bool {
        false
    }
}

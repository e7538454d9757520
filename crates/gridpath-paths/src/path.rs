use gridpath_core::Point;

use crate::PathRange;

impl PathRange {
    /// Reconstruct the path ending at `finish` from the predecessors left by
    /// the last search.
    ///
    /// Predecessors are followed back until a cell without one, and the
    /// result is returned in start → finish order. If `finish` was never
    /// reached the result is the single-element `[finish]`; callers detect
    /// failure by checking that the first element is the start.
    pub fn reconstruct(&self, finish: Point) -> Vec<Point> {
        let mut path = vec![finish];
        let mut cur = finish;
        while let Some(prev) = self.prev_at(cur) {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }

    /// Total edge weight along `path` under this range's config.
    ///
    /// Returns `f64::INFINITY` if two consecutive points are not adjacent.
    pub fn path_cost(&self, path: &[Point]) -> f64 {
        path.windows(2)
            .map(|w| self.config.step_cost(w[0], w[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Grid;

    fn rc(row: i32, col: i32) -> Point {
        Point::from_rc(row, col)
    }

    #[test]
    fn three_by_three_path() {
        let g = Grid::new(3, 3);
        let mut pr = PathRange::new(g.bounds());
        pr.search(&g, rc(0, 0), rc(2, 2)).unwrap();
        let path = pr.reconstruct(rc(2, 2));
        assert_eq!(path, vec![rc(0, 0), rc(1, 1), rc(2, 2)]);
        assert_eq!(pr.path_cost(&path), pr.distance_at(rc(2, 2)));
    }

    #[test]
    fn path_goes_around_walls() {
        let g: Grid = "\
S.....
####..
F.....
"
        .parse()
        .unwrap();
        let (start, finish) = (g.start().unwrap(), g.finish().unwrap());
        let mut pr = PathRange::new(g.bounds());
        let order = pr.search(&g, start, finish).unwrap();
        assert_eq!(order.last(), Some(&finish));

        let path = pr.reconstruct(finish);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&finish));
        assert!(path.iter().all(|&p| !g.is_wall(p)));
        assert!(path.windows(2).all(|w| pr.config().step_cost(w[0], w[1]).is_finite()));
        assert_eq!(pr.path_cost(&path), pr.distance_at(finish));
    }

    #[test]
    fn unreached_finish_is_degenerate() {
        let g: Grid = "\
S#.
##.
..F"
        .parse()
        .unwrap();
        let mut pr = PathRange::new(g.bounds());
        let order = pr.search_grid(&g).unwrap();
        assert_eq!(order, &[rc(0, 0)]);
        assert_eq!(pr.reconstruct(rc(2, 2)), vec![rc(2, 2)]);
    }

    #[test]
    fn reconstruct_start_and_before_search() {
        let g = Grid::new(4, 4);
        let mut pr = PathRange::new(g.bounds());
        assert_eq!(pr.reconstruct(rc(3, 3)), vec![rc(3, 3)]);
        assert_eq!(pr.reconstruct(rc(9, 9)), vec![rc(9, 9)]);
        pr.search(&g, rc(1, 1), rc(3, 3)).unwrap();
        assert_eq!(pr.reconstruct(rc(1, 1)), vec![rc(1, 1)]);
    }

    #[test]
    fn path_cost_of_straight_and_broken_paths() {
        let pr = PathRange::new(Grid::new(3, 3).bounds());
        assert_eq!(pr.path_cost(&[rc(0, 0), rc(0, 1), rc(0, 2)]), 2.0);
        assert_eq!(pr.path_cost(&[rc(0, 0), rc(1, 1)]), 1.4);
        assert_eq!(pr.path_cost(&[rc(0, 0)]), 0.0);
        assert_eq!(pr.path_cost(&[rc(0, 0), rc(2, 2)]), f64::INFINITY);
    }
}

use gridpath_core::{Grid, Point};

use crate::config::SearchConfig;
use crate::traits::WeightedPather;

/// Orthogonal offsets in relaxation order: up, down, left, right.
pub const ORTHOGONAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Diagonal offsets in relaxation order: up-left, up-right, down-left,
/// down-right.
pub const DIAGONAL: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// [`WeightedPather`] over a [`Grid`]: walls and out-of-bounds points are
/// skipped, and edge weights come from a [`SearchConfig`].
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    config: SearchConfig,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(|c| !c.is_wall)
    }
}

impl WeightedPather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let diagonal: &[Point] = if self.config.allow_diagonal {
            &DIAGONAL
        } else {
            &[]
        };
        for &d in ORTHOGONAL.iter().chain(diagonal) {
            let n = p + d;
            if self.passable(n) {
                buf.push(n);
            }
        }
    }

    #[inline]
    fn cost(&self, from: Point, to: Point) -> f64 {
        self.config.step_cost(from, to)
    }

    #[inline]
    fn blocked(&self, p: Point) -> bool {
        !self.passable(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(pather: &GridPather<'_>, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        pather.neighbors(p, &mut buf);
        buf
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let g = Grid::new(3, 3);
        let pather = GridPather::new(&g, SearchConfig::default());
        let ns = neighbors_of(&pather, Point::new(1, 1));
        assert_eq!(
            ns,
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(0, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn corner_is_clipped_to_bounds() {
        let g = Grid::new(3, 3);
        let pather = GridPather::new(&g, SearchConfig::default());
        let ns = neighbors_of(&pather, Point::new(0, 0));
        assert_eq!(ns, vec![Point::new(0, 1), Point::new(1, 0), Point::new(1, 1)]);
    }

    #[test]
    fn walls_are_skipped_and_blocked() {
        let g: Grid = "\
.#.
#..
..."
        .parse()
        .unwrap();
        let pather = GridPather::new(&g, SearchConfig::default());
        let ns = neighbors_of(&pather, Point::new(0, 0));
        assert_eq!(ns, vec![Point::new(1, 1)]);
        assert!(pather.blocked(Point::new(1, 0)));
        assert!(pather.blocked(Point::new(5, 5)));
        assert!(!pather.blocked(Point::new(2, 2)));
    }

    #[test]
    fn orthogonal_config_has_four_neighbors() {
        let g = Grid::new(3, 3);
        let pather = GridPather::new(&g, SearchConfig::orthogonal());
        assert_eq!(neighbors_of(&pather, Point::new(1, 1)).len(), 4);
        assert_eq!(pather.cost(Point::new(1, 1), Point::new(1, 2)), 1.0);
    }
}

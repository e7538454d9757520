use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Point::new(1, 1);
        assert_eq!(manhattan(a, Point::new(2, 1)), 1);
        assert_eq!(chebyshev(a, Point::new(2, 1)), 1);
        assert_eq!(manhattan(a, Point::new(2, 2)), 2);
        assert_eq!(chebyshev(a, Point::new(2, 2)), 1);
        assert_eq!(chebyshev(a, Point::new(-2, 3)), 3);
    }
}

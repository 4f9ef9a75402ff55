use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the heuristic used by [`Pathfinder`](crate::Pathfinder): it sums
/// the axis deltas without scaling, so it deliberately underweights the
/// remaining distance relative to the 10/14 step costs.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
///
/// On an open grid with unrestricted diagonal movement, this is the number
/// of steps in a shortest path.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(1, 2);
        let b = Point::new(4, -2);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(manhattan(a, a), 0);
        assert_eq!(chebyshev(a, a), 0);
    }
}

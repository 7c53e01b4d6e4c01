use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On an obstacle-free 4-connected grid this is the number of steps in a
/// shortest path.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(b, b), 0);
        assert_eq!(manhattan(Point::new(-2, 5), Point::new(1, 1)), 7);
    }
}

use gridpath_core::Point;

/// Expansion order of the four cardinal directions: +x, +y, -x, -y.
pub const CARDINAL_DIRS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
];

/// Append the cardinal neighbors of `p` to `buf` in [`CARDINAL_DIRS`] order,
/// keeping only those for which `keep` returns `true`.
pub fn push_cardinal(p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
    for d in CARDINAL_DIRS {
        let n = p + d;
        if keep(n) {
            buf.push(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order() {
        let mut buf = Vec::new();
        push_cardinal(Point::new(5, 5), &mut buf, |_| true);
        assert_eq!(
            buf,
            vec![
                Point::new(6, 5),
                Point::new(5, 6),
                Point::new(4, 5),
                Point::new(5, 4),
            ]
        );
    }

    #[test]
    fn cardinal_filters_and_appends() {
        let mut buf = vec![Point::new(9, 9)];
        push_cardinal(Point::ZERO, &mut buf, |p| p.x >= 0 && p.y >= 0);
        assert_eq!(buf, [Point::new(9, 9), Point::new(1, 0), Point::new(0, 1)]);
    }
}

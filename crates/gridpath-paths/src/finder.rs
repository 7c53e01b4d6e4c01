use gridpath_core::{Point, Range};

use crate::PathError;
use crate::grid::OpenGrid;
use crate::search::shortest_path;
use crate::traits::PathFinder;

/// Shortest 4-directional paths on a fixed, obstacle-free grid.
///
/// Holds no per-query state, so one finder can serve concurrent queries
/// behind a shared reference.
#[derive(Copy, Clone, Debug, Default)]
pub struct GridPathFinder {
    grid: OpenGrid,
}

impl GridPathFinder {
    /// Finder over the cells of `bounds`.
    pub fn new(bounds: Range) -> Self {
        Self {
            grid: OpenGrid::new(bounds),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.grid.bounds()
    }
}

impl PathFinder for GridPathFinder {
    /// Endpoints outside [`GridPathFinder::bounds`] are rejected with
    /// [`PathError::OutOfBounds`].
    fn find_path(&self, start: Point, end: Point) -> Result<Option<Vec<Point>>, PathError> {
        shortest_path(&self.grid, self.grid.bounds(), start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manhattan;
    use gridpath_core::GRID_BOUNDS;

    fn len_between(f: &GridPathFinder, a: (i32, i32), b: (i32, i32)) -> usize {
        f.find_path(Point::new(a.0, a.1), Point::new(b.0, b.1))
            .unwrap()
            .map_or(0, |p| p.len())
    }

    #[test]
    fn default_uses_fixed_grid() {
        assert_eq!(GridPathFinder::default().bounds(), GRID_BOUNDS);
    }

    #[test]
    fn origin_to_origin() {
        let f = GridPathFinder::default();
        assert_eq!(
            f.find_path(Point::ZERO, Point::ZERO),
            Ok(Some(vec![Point::ZERO]))
        );
    }

    #[test]
    fn known_lengths() {
        let f = GridPathFinder::default();
        assert_eq!(len_between(&f, (0, 0), (2, 0)), 3);
        assert_eq!(len_between(&f, (0, 0), (3, 4)), 8);
        assert_eq!(len_between(&f, (0, 0), (19, 19)), 39);
        assert_eq!(len_between(&f, (19, 0), (0, 19)), 39);
    }

    #[test]
    fn never_no_path_inside_grid() {
        let f = GridPathFinder::default();
        let end = Point::new(12, 5);
        for start in f.bounds() {
            let path = f.find_path(start, end).unwrap().unwrap();
            assert_eq!(path[0], start);
            assert_eq!(path[path.len() - 1], end);
            assert_eq!(path.len() as i32, manhattan(start, end) + 1);
            assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        }
    }

    #[test]
    fn rejects_points_outside_grid() {
        let f = GridPathFinder::default();
        let err = f.find_path(Point::new(-1, 0), Point::new(2, 2)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "point (-1, 0) is outside grid bounds [(0, 0)-(20, 20))"
        );
        assert!(f.find_path(Point::new(0, 0), Point::new(0, 20)).is_err());
    }

    #[test]
    fn custom_bounds() {
        let f = GridPathFinder::new(Range::new(5, 5, 8, 8));
        assert!(f.find_path(Point::ZERO, Point::new(6, 6)).is_err());
        assert_eq!(len_between(&f, (5, 5), (7, 7)), 5);
    }
}

use gridpath_core::Point;

use crate::PathError;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Answers a single start/end shortest-path query.
///
/// `Ok(None)` means no path exists; errors are reserved for queries the
/// finder refuses to run.
pub trait PathFinder {
    fn find_path(&self, start: Point, end: Point) -> Result<Option<Vec<Point>>, PathError>;
}

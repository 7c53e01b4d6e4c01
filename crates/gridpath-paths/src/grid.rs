use gridpath_core::{GRID_BOUNDS, Point, Range};

use crate::neighbors::push_cardinal;
use crate::traits::{Pather, WeightedPather};

/// Obstacle-free 4-connected lattice where every step costs 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpenGrid {
    bounds: Range,
}

impl Default for OpenGrid {
    fn default() -> Self {
        Self::new(GRID_BOUNDS)
    }
}

impl OpenGrid {
    pub fn new(bounds: Range) -> Self {
        Self { bounds }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }
}

impl Pather for OpenGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        push_cardinal(p, buf, |n| self.bounds.contains(n));
    }
}

impl WeightedPather for OpenGrid {
    #[inline]
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

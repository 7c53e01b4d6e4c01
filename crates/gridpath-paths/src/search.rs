//! Uniform-cost (Dijkstra) search over a bounded grid.
//!
//! All bookkeeping lives in a [`SearchState`] owned by one query. Cells are
//! addressed by their row-major index within the search bounds, so every
//! stored index is in bounds by construction.

use gridpath_core::{Point, Range};

use crate::PathError;
use crate::frontier::Frontier;
use crate::traits::WeightedPather;

/// Sentinel distance for cells not (yet) reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Distances, predecessors and frontier for a single search.
pub struct SearchState {
    bounds: Range,
    dist: Vec<i32>,
    prev: Vec<Option<usize>>,
    frontier: Frontier<usize>,
    pops: usize,
}

impl SearchState {
    /// Fresh state with every cell of `bounds` at [`UNREACHABLE`].
    pub fn new(bounds: Range) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            dist: vec![UNREACHABLE; len],
            prev: vec![None; len],
            frontier: Frontier::with_capacity(len),
            pops: 0,
        }
    }

    /// Best known distance to `p`, or [`UNREACHABLE`].
    pub fn distance(&self, p: Point) -> i32 {
        match self.bounds.index_of(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Predecessor of `p` on its best known path.
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        let i = self.bounds.index_of(p)?;
        self.prev[i].map(|pi| self.bounds.point_at(pi))
    }

    /// Number of frontier entries popped so far, stale ones included.
    pub fn pops(&self) -> usize {
        self.pops
    }

    /// Search from `start` until `end` is settled.
    ///
    /// Returns the path from `start` to `end` inclusive, or `None` once the
    /// frontier runs dry. Both points must lie inside the state's bounds.
    pub fn run<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: Point,
        end: Point,
    ) -> Result<Option<Vec<Point>>, PathError> {
        let start_idx = self.checked_idx(start)?;
        let goal_idx = self.checked_idx(end)?;

        self.dist[start_idx] = 0;
        self.frontier.push(start_idx, 0);

        let mut nbuf = Vec::with_capacity(4);

        while let Some((ci, d)) = self.frontier.pop_min() {
            self.pops += 1;

            // Superseded by a shorter entry pushed later.
            if d > self.dist[ci] {
                continue;
            }
            if ci == goal_idx {
                return Ok(self.reconstruct(start_idx, goal_idx));
            }

            let cp = self.bounds.point_at(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.bounds.index_of(np) else {
                    continue;
                };
                let tentative = d + pather.cost(cp, np);
                if tentative >= self.dist[ni] {
                    continue;
                }
                self.dist[ni] = tentative;
                self.prev[ni] = Some(ci);
                self.frontier.push(ni, tentative);
            }
        }

        Ok(None)
    }

    fn checked_idx(&self, p: Point) -> Result<usize, PathError> {
        self.bounds.index_of(p).ok_or(PathError::OutOfBounds {
            point: p,
            bounds: self.bounds,
        })
    }

    /// Walk predecessors back from `goal`, stopping at `start` itself.
    fn reconstruct(&self, start: usize, goal: usize) -> Option<Vec<Point>> {
        let mut path = Vec::new();
        let mut ci = goal;
        loop {
            path.push(self.bounds.point_at(ci));
            if ci == start {
                break;
            }
            ci = self.prev[ci]?;
        }
        path.reverse();
        Some(path)
    }
}

/// Shortest path from `start` to `end` over `pather`, restricted to `bounds`.
///
/// Identical endpoints short-circuit to `[start]` without searching.
pub fn shortest_path<P: WeightedPather>(
    pather: &P,
    bounds: Range,
    start: Point,
    end: Point,
) -> Result<Option<Vec<Point>>, PathError> {
    for p in [start, end] {
        if !bounds.contains(p) {
            return Err(PathError::OutOfBounds { point: p, bounds });
        }
    }
    if start == end {
        return Ok(Some(vec![start]));
    }

    let mut state = SearchState::new(bounds);
    let path = state.run(pather, start, end)?;
    log::trace!(
        "search {start} -> {end}: {} pops, {}",
        state.pops(),
        match &path {
            Some(p) => format!("{} cells", p.len()),
            None => "no path".to_string(),
        }
    );
    Ok(path)
}

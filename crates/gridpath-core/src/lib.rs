//! **gridpath-core** — coordinate types shared by the gridpath crates.
//!
//! A [`Point`] names one cell of the lattice and a [`Range`] describes the
//! rectangle of valid cells. [`GRID_BOUNDS`] is the fixed 20×20 grid every
//! search in the service runs on.

pub mod geom;

pub use geom::{GRID_BOUNDS, Point, Range, RangeIter};

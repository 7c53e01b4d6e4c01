//! Shortest paths on bounded 2D grids.
//!
//! The search is Dijkstra's algorithm driven by an explicit min-priority
//! [`Frontier`]. It is generic over a [`WeightedPather`], which supplies
//! neighbours and step costs; [`OpenGrid`] is the obstacle-free 4-connected
//! lattice used by [`GridPathFinder`].
//!
//! ```
//! use gridpath_core::Point;
//! use gridpath_paths::{GridPathFinder, PathFinder};
//!
//! let finder = GridPathFinder::default();
//! let path = finder
//!     .find_path(Point::new(0, 0), Point::new(2, 0))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.len(), 3);
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | step cost for the search |
//! | [`PathFinder`] | the start/end query served over HTTP |

mod distance;
mod error;
mod finder;
mod frontier;
mod grid;
mod neighbors;
pub mod search;
mod traits;

pub use distance::manhattan;
pub use error::PathError;
pub use finder::GridPathFinder;
pub use frontier::Frontier;
pub use grid::OpenGrid;
pub use neighbors::{CARDINAL_DIRS, push_cardinal};
pub use search::UNREACHABLE;
pub use traits::{PathFinder, Pather, WeightedPather};

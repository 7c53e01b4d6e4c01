use gridpath_core::{Point, Range};
use thiserror::Error;

/// Reasons a path query is refused before searching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("point {point} is outside grid bounds {bounds}")]
    OutOfBounds { point: Point, bounds: Range },
}

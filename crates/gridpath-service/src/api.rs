//! Request and response bodies for `/find-path`.

use gridpath_core::Point;
use serde::{Deserialize, Serialize};

/// `{"start": {"x": .., "y": ..}, "end": {"x": .., "y": ..}}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRequest {
    pub start: Point,
    pub end: Point,
}

/// `{"shortestPath": [{"x": .., "y": ..}, ...]}`
///
/// An empty array means no path exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    #[serde(rename = "shortestPath")]
    pub shortest_path: Vec<Point>,
}

impl From<Option<Vec<Point>>> for PathResponse {
    fn from(path: Option<Vec<Point>>) -> Self {
        Self {
            shortest_path: path.unwrap_or_default(),
        }
    }
}

//! HTTP adapter around [`gridpath_paths::GridPathFinder`].
//!
//! One endpoint, `/find-path`: `POST` a start/end pair as JSON and receive
//! the shortest path as `{"shortestPath": [...]}`. `OPTIONS` answers browser
//! preflight. Every response carries permissive cross-origin headers.

pub mod api;
pub mod config;
pub mod error;
pub mod router;

pub use api::{PathRequest, PathResponse};
pub use config::ServiceConfig;
pub use error::ServiceError;
pub use router::{FIND_PATH_ROUTE, build_router};

//! Service configuration.
//!
//! The listen address and grid are fixed; [`ServiceConfig::default`] is what
//! the binary runs with.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use gridpath_core::{GRID_BOUNDS, Range};
use gridpath_paths::GridPathFinder;

/// Port the service listens on.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Cells searched by every request.
    pub bounds: Range,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            bounds: GRID_BOUNDS,
        }
    }
}

impl ServiceConfig {
    /// Path finder over the configured grid.
    pub fn finder(&self) -> GridPathFinder {
        GridPathFinder::new(self.bounds)
    }
}

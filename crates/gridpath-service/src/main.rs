//! `gridpath` — serves shortest paths on a 20×20 grid at `/find-path`.
//!
//! ```bash
//! cargo run --release
//! curl -X POST localhost:8080/find-path \
//!      -d '{"start":{"x":0,"y":0},"end":{"x":3,"y":4}}'
//! ```
//!
//! Log verbosity follows `RUST_LOG` and defaults to `info`.

use std::sync::Arc;

use gridpath_service::{ServiceConfig, build_router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServiceConfig::default();
    let app = build_router(Arc::new(config.finder()));

    let listener = match TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Error starting server on {}: {e}", config.bind_addr);
            return Err(e.into());
        }
    };

    log::info!(
        "Server running on {} (grid {})",
        config.bind_addr,
        config.bounds
    );
    axum::serve(listener, app).await?;
    Ok(())
}

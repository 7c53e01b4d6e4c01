//! Router and handlers for `/find-path`.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderValue, StatusCode, header};
use axum::routing::post;
use gridpath_paths::PathFinder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::{PathRequest, PathResponse};
use crate::error::ServiceError;

pub const FIND_PATH_ROUTE: &str = "/find-path";

/// Build the router around an injected path finder.
///
/// The cross-origin headers are set on every response, errors included.
pub fn build_router<F>(finder: Arc<F>) -> Router
where
    F: PathFinder + Send + Sync + 'static,
{
    Router::new()
        .route(FIND_PATH_ROUTE, post(find_path::<F>).options(preflight))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(finder)
}

/// Preflight: headers only, empty body.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Decode a [`PathRequest`] and answer with the shortest path.
///
/// The body is decoded as JSON whatever its declared content type.
async fn find_path<F>(
    State(finder): State<Arc<F>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PathResponse>, ServiceError>
where
    F: PathFinder + Send + Sync + 'static,
{
    let body = body.map_err(|e| ServiceError::BodyRead(e.body_text()))?;
    let req: PathRequest = serde_json::from_slice(&body)?;

    let path = finder.find_path(req.start, req.end)?;
    log::debug!(
        "find-path {} -> {}: {}",
        req.start,
        req.end,
        path.as_ref()
            .map_or_else(|| "no path".to_string(), |p| format!("{} cells", p.len()))
    );

    Ok(Json(PathResponse::from(path)))
}

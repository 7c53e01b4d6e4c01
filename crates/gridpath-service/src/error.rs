use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gridpath_paths::PathError;
use thiserror::Error;

/// Request failures. All of them are the caller's to fix and map to 400.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    BodyRead(String),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    OutOfBounds(#[from] PathError),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        log::warn!("rejecting request: {self}");
        (self.status(), self.to_string()).into_response()
    }
}

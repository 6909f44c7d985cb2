use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failures raised by handlers once a request has been accepted. Extractor
/// rejections (bad JSON, bad path id) never reach this type.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{}", self);
        match self {
            ApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage unavailable"),
            ApiError::Join(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
        }
        .into_response()
    }
}

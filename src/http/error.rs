//! Mapping of handler failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::greeting::DispatchError;
use crate::http::views::ViewError;

/// Errors surfaced by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `name` query parameter missing or empty.
    #[error("A name must be specified")]
    MissingName,

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    View(#[from] ViewError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingName => StatusCode::BAD_REQUEST,
            ApiError::Dispatch(_) | ApiError::View(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::MissingName => {
                tracing::warn!(status = %status, "Rejected greeting request without a name");
                self.to_string()
            }
            ApiError::Dispatch(DispatchError::NoServiceFound { key }) => {
                tracing::error!(status = %status, key = %key, error = %self, "Greeting dispatch failed");
                self.to_string()
            }
            ApiError::View(e) => {
                tracing::error!(status = %status, error = %e, "View rendering failed");
                "Failed to render view".to_string()
            }
        };
        (status, body).into_response()
    }
}

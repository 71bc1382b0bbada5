//! Response envelope and boundary error mapping.
//!
//! # Responsibilities
//! - Wrap every operation result in `{success, result, detail}`
//! - Translate `ApiError` into HTTP status + envelope body
//!
//! # Design Decisions
//! - Handlers never build status codes themselves; `ApiError` is the only
//!   place where errors become HTTP
//! - A domain-undefined result (zero-vector angle) is a 200 with
//!   `success: false`, not an error status

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vector::VectorError;

/// Envelope returned by every operation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            detail: None,
        }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            detail: Some(detail.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body could not be read or deserialized into the expected shape.
    #[error("{0}")]
    InvalidBody(String),

    #[error("{0}")]
    BodyTooLarge(String),

    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error("no route for {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::Vector(_) => StatusCode::BAD_REQUEST,
            ApiError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, error = %self, "Request rejected");
        (status, Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
    }
}

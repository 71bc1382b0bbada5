//! Request identification and body extraction.
//!
//! # Responsibilities
//! - Generate a UUID v4 request ID for every request
//! - Deserialize and validate JSON bodies before handlers run
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Every body rejection (content type, syntax, missing field, non-finite
//!   value) becomes the same 400 envelope; only an oversized body keeps 413

use axum::{
    extract::{FromRequest, Json, Request},
    http::{HeaderValue, StatusCode},
};
use serde::de::DeserializeOwned;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::response::ApiError;
use crate::vector::Validate;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates `x-request-id` values from random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// JSON body that has passed both deserialization and [`Validate`].
pub struct VectorJson<T>(pub T);

impl<T, S> FromRequest<S> for VectorJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::BodyTooLarge(rejection.body_text())
                } else {
                    ApiError::InvalidBody(rejection.body_text())
                }
            })?;

        value.validate()?;
        Ok(Self(value))
    }
}

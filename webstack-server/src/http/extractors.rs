//! Custom Axum extractors
//!
//! Body extractors whose rejections become `ApiError::Validation` (400),
//! so a malformed create request gets the same status as one with a
//! missing field.

use axum::extract::{FromRequest, Request};
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Form body; any rejection (content type, duplicate field, bad encoding) is a 400
pub struct ValidForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(status = %e.status(), "Form body rejected: {}", e.body_text());
            invalid_body(e.body_text())
        })?;
        Ok(Self(value))
    }
}

/// JSON body; any rejection (content type, syntax, shape) is a 400
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(status = %e.status(), "JSON body rejected: {}", e.body_text());
            invalid_body(e.body_text())
        })?;
        Ok(Self(value))
    }
}

fn invalid_body(reason: String) -> ApiError {
    ApiError::Validation(ValidationError::InvalidBody { reason })
}

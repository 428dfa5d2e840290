//! Typed error handling for the API
//!
//! Every failure a request can hit maps onto one [`ApiError`] variant, and
//! each variant carries everything needed to render the HTTP response: the
//! status code and the human-readable message. Handlers and validators
//! short-circuit with `?`; the [`IntoResponse`] impl turns the error into
//! the JSON body `{"message": "..."}` with the variant's status code.
//!
//! # Error Categories
//!
//! - `Validation` (400): missing/invalid field, body-id mismatch, illegal
//!   status transition, illegal delete state
//! - `NotFound` (404): record id not present in the store
//! - `MethodNotAllowed` (405): verb not supported on a matched route
//! - `RouteNotFound` (404): no route matched the path
//! - `Internal` (500): store lock poisoning; never expected in normal
//!   operation

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::sync::PoisonError;
use thiserror::Error;

/// The error type surfaced by every handler and validator in the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// A request field failed validation, or a guarded mutation was refused.
    #[error("{message}")]
    Validation { message: String },

    /// The requested record does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// The route exists but does not support this verb.
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// No route matched the request path.
    #[error("Not found: {path}")]
    RouteNotFound { path: String },

    /// Internal failure (should not happen in normal operation).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    /// Build a `Validation` error from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Build a `NotFound` error from any message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        }
        let body = Json(ErrorBody {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

// Lets store methods use `?` on lock acquisition.
impl<T> From<PoisonError<T>> for ApiError {
    fn from(err: PoisonError<T>) -> Self {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

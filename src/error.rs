//! Error types for the shout service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Messages ==
/// Returned when the `data` field cannot be extracted from a request.
pub const INVALID_INPUT_MESSAGE: &str =
    "Data was not able to be parsed from request. Please try again.";

/// Returned when the upstream API cannot be reached.
pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "Failed to contact shoutcloud api";

/// Returned when the upstream body is not JSON.
pub const UPSTREAM_NOT_JSON_MESSAGE: &str = "Shoutcloud failed to return proper response";

/// Returned when the upstream JSON lacks a string `OUTPUT` field.
pub const UPSTREAM_BAD_SHAPE_MESSAGE: &str = "shoutcloud api gave back bad response";

// == Service Error Enum ==
/// Unified error type for the shout service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Request body did not carry a usable `data` string
    #[error("{0}")]
    InvalidInput(String),

    /// Upstream could not be contacted (connection error, timeout, body read)
    #[error("{message}")]
    UpstreamUnavailable { message: String, status: StatusCode },

    /// Upstream answered with an unusable payload
    #[error("{0}")]
    UpstreamBadResponse(String),
}

impl ServiceError {
    /// The canonical request parsing failure.
    pub fn invalid_input() -> Self {
        ServiceError::InvalidInput(INVALID_INPUT_MESSAGE.to_string())
    }

    /// Upstream unreachable, reported as a 500.
    pub fn upstream_unavailable() -> Self {
        ServiceError::UpstreamUnavailable {
            message: UPSTREAM_UNAVAILABLE_MESSAGE.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::UpstreamUnavailable { status, .. } => *status,
            ServiceError::UpstreamBadResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Health Check Failure ==
/// Failure of the `/health` probe.
///
/// Unlike [`ServiceError`] this is not rendered as a JSON envelope: a failed
/// probe answers with a bare 500 so liveness checks fail loudly.
#[derive(Error, Debug)]
pub enum HealthCheckFailure {
    #[error("upstream probe failed: {0}")]
    Upstream(#[from] ServiceError),

    #[error("upstream probe returned {actual:?}, expected {expected:?}")]
    UnexpectedOutput {
        expected: &'static str,
        actual: String,
    },
}

impl IntoResponse for HealthCheckFailure {
    fn into_response(self) -> Response {
        error!("Health check failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the shout service.
pub type Result<T> = std::result::Result<T, ServiceError>;

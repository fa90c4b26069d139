use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use risktrack_core::risk::{risk_error_to_status_code, RiskError};
use risktrack_core::storage::{repository_error_to_status_code, RepositoryError};

const INTERNAL_SERVER_ERROR: &str = "internal server error";

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Builds a JSON `{"error": ...}` response.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Error returned by the API handlers.
///
/// Validation failures are reported with their own message. Server-side
/// failures are logged and replaced with a generic message.
#[derive(Debug)]
pub enum ApiError {
    Validation(RiskError),
    Repository(RepositoryError),
}

impl From<RiskError> for ApiError {
    fn from(err: RiskError) -> Self {
        Self::Validation(err)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}

fn status_from(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                let status = status_from(risk_error_to_status_code(&err));
                tracing::warn!(status = %status, message = %err, "Rejected request");
                error_response(status, err.to_string())
            }
            ApiError::Repository(err) => {
                let status = status_from(repository_error_to_status_code(&err));
                match err {
                    RepositoryError::NotFound { .. } if status == StatusCode::NOT_FOUND => {
                        tracing::debug!(error = %err, "Risk not found");
                        error_response(status, "risk not found")
                    }
                    _ => {
                        tracing::error!(error = %err, "Repository error");
                        error_response(status, INTERNAL_SERVER_ERROR)
                    }
                }
            }
        }
    }
}

/// Converts a panic caught by `CatchPanicLayer` into a 500 response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details: &str = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(error = %details, "Recovered from panic");

    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

/// Gives the empty 408 produced by `TimeoutLayer` the usual error body.
pub async fn timeout_response(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request timed out");

    error_response(StatusCode::REQUEST_TIMEOUT, "request timeout")
}

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::{ErrorKind, RosterError};
use tracing::error;

use crate::model::MessageResponse;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors returned by handlers, rendered as `{"message": ...}`.
#[derive(Debug)]
pub enum AppError {
    /// A failure reported by the record service.
    Roster(RosterError),
    /// The request body could not be read as the expected JSON.
    InvalidBody(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Roster(err) => match err.kind() {
                ErrorKind::Validation => StatusCode::BAD_REQUEST,
                ErrorKind::Conflict => StatusCode::CONFLICT,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<RosterError> for AppError {
    fn from(value: RosterError) -> Self {
        Self::Roster(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidBody(value.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Roster(err) if status.is_server_error() => {
                error!(error = %err, "record service failed");
                "Internal server error".to_string()
            }
            AppError::Roster(err) => err.to_string(),
            AppError::InvalidBody(message) => message,
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}

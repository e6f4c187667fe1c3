use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid user id: {0}")]
    InvalidId(#[from] uuid::Error),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Store failure; `message` is the driver's text, passed through as-is.
    #[error("{action}: {message}")]
    Storage {
        action: &'static str,
        message: String,
    },
}

impl AppError {
    pub fn storage(action: &'static str, err: anyhow::Error) -> Self {
        AppError::Storage {
            action,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure is a 500; only the text tells them apart.
        match &self {
            AppError::InvalidId(e) => {
                tracing::warn!(error = %e, "rejected malformed user id");
            }
            AppError::InvalidBody(e) => {
                tracing::warn!(error = %e, "rejected malformed request body");
            }
            AppError::Storage { action, message } => {
                tracing::error!(error = %message, "{}", action);
            }
        }
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

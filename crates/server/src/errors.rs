use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nl2sql::PromptError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// Every variant is logged and rendered as a generic `500 Internal Server Error`
/// with a JSON body of the form `{"error": "<message>"}`.
#[derive(Debug)]
pub enum AppError {
    /// Errors originating from the `nl2sql` library.
    Prompt(PromptError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

/// Conversion from `PromptError` to `AppError`.
impl From<PromptError> for AppError {
    fn from(err: PromptError) -> Self {
        AppError::Prompt(err)
    }
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = match self {
            AppError::Prompt(err) => {
                // Log the original error for debugging purposes
                error!("PromptError: {:?}", err);
                err.to_string()
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                err.to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

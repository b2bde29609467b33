// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::message::ErrorResponse;
use crate::services::provider::ProviderError;

pub const MISSING_MESSAGE: &str = "Message is required";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Message is required")]
    MissingMessage,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingMessage => (StatusCode::BAD_REQUEST, MISSING_MESSAGE),
            AppError::Provider(err) => {
                // Details stay in the logs, the caller only sees the generic text.
                error!(error = %err, "chat relay failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
            }
        };

        (status, Json(ErrorResponse { error: message.to_string() })).into_response()
    }
}

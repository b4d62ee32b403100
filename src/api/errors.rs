use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::errors::LabelError;
use crate::application::ports::StorageError;
use crate::application::use_cases::PreviewError;

const GENERIC_FAILURE: &str = "An internal error occurred while generating the label";

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

// Convert use case errors to API errors

impl From<LabelError> for ApiError {
    fn from(err: LabelError) -> Self {
        if err.is_validation() {
            return ApiError::bad_request(err.to_string());
        }
        error!("Label generation failed: {}", err);
        ApiError::internal_error(GENERIC_FAILURE)
    }
}

impl From<PreviewError> for ApiError {
    fn from(err: PreviewError) -> Self {
        match err {
            PreviewError::EmptyText => ApiError::bad_request(PreviewError::EmptyText.to_string()),
            PreviewError::Encoding(e) => {
                error!("QR preview failed: {}", e);
                ApiError::internal_error("Failed to generate QR code")
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) | StorageError::InvalidName(_) => {
                ApiError::not_found("File not found")
            }
            StorageError::Io(e) => {
                error!("Storage error: {}", e);
                ApiError::internal_error("Storage error")
            }
        }
    }
}

use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::InternalError;
use crate::types::dto::common::ErrorResponse;

/// API error types. Every variant renders as `{"message": ...}` at its
/// status code.
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Requested entity does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    Internal(Json<ErrorResponse>),
}

impl ApiError {
    /// Create a NotFound error with an entity-specific message
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(Json(ErrorResponse {
            message: message.into(),
        }))
    }

    /// Create a generic internal server error
    ///
    /// Always returns the same message; internal details are logged at the
    /// conversion point and never exposed to clients.
    fn internal_server_error() -> Self {
        ApiError::Internal(Json(ErrorResponse {
            message: "An internal error occurred".to_string(),
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound(json) => &json.0.message,
            ApiError::Internal(json) => &json.0.message,
        }
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        match &err {
            InternalError::Database { operation, .. } => {
                tracing::error!("Database error in {}: {}", operation, err);
            }
        }
        Self::internal_server_error()
    }
}

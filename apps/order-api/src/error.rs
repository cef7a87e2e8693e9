//! Error types for the Order API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use order_pricing_core::PricingError;
use serde_json::json;
use tracing::{error, info};

/// Order API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PricingError> for ApiError {
    fn from(error: PricingError) -> Self {
        match error {
            PricingError::Rejected(reason) => ApiError::InvalidRequest(reason.to_string()),
            unavailable @ PricingError::Unavailable { .. } => {
                ApiError::NotFound(unavailable.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(msg) => {
                error!(%msg, "Internal server error");
                "Internal Server Error".to_string()
            }
            other => {
                info!(status = status.as_u16(), error = %other, "Request refused");
                other.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

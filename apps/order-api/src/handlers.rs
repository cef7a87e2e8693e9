//! # HTTP Handlers
//!
//! Request handlers for the Order API. Handlers only translate between HTTP
//! and the pricing engine; every pricing decision is made in
//! `order-pricing-core`.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Order API Routes                               │
//! │                                                                         │
//! │  POST /order ──▶ read body (≤ MAX_BODY_BYTES)                          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │               ┌─────────────────┐                                       │
//! │               │  Order (serde)  │ ──── unreadable / malformed ──▶ 400  │
//! │               └────────┬────────┘                                       │
//! │                        ▼                                                │
//! │               ┌─────────────────┐                                       │
//! │               │ calculate_total │ ──── Rejected ────────────────▶ 400  │
//! │               └────────┬────────┘ ──── Unavailable ─────────────▶ 404  │
//! │                        ▼                                                │
//! │               ┌─────────────────┐                                       │
//! │               │   json_reply    │ ──── serialization failure ───▶ 500  │
//! │               └────────┬────────┘                                       │
//! │                        ▼                                                │
//! │                 200 {"total": x}                                        │
//! │                                                                         │
//! │  *    /order    ──▶ 400 (only POST is accepted)                        │
//! │  *    /feedback ──▶ log body ──▶ 200, or 204 when the body is          │
//! │                                   unreadable                            │
//! │  GET  /health   ──▶ "OK"                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use order_pricing_core::{calculate_total, Order};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::AppState;

/// Reply body for a priced order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalReply {
    pub total: f64,
}

/// Prices the order in the request body.
///
/// ## User Workflow
/// ```text
/// POST /order {"prices":[100],"quantities":[10],"country":"DE","reduction":"STANDARD"}
///      │
///      ▼
/// raw 1000.00 → taxed 1200.00 (DE 20%) → ×0.97 (STANDARD band)
///      │
///      ▼
/// 200 {"total": 1164.0}
/// ```
///
/// The body is read up to `MAX_BODY_BYTES`; a larger or unreadable body is
/// a client error like malformed JSON.
pub async fn create_order(
    State(state): State<AppState>,
    body: Body,
) -> Result<Response, ApiError> {
    let bytes = axum::body::to_bytes(body, state.config.max_body_bytes)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to read order body");
            ApiError::InvalidRequest(format!("unreadable order body: {e}"))
        })?;

    let order: Order = serde_json::from_slice(&bytes).map_err(|e| {
        warn!(error = %e, "Failed to parse order");
        ApiError::InvalidRequest(format!("malformed order: {e}"))
    })?;
    debug!(?order, "Order received");

    let total = calculate_total(&order)?;
    info!(
        lines = order.prices.len(),
        country = %order.country,
        tier = %order.reduction,
        total = %total,
        "Order priced"
    );

    json_reply(&TotalReply {
        total: total.to_decimal(),
    })
}

/// Serializes a success reply as `application/json`.
fn json_reply<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value)
        .map_err(|e| ApiError::Internal(format!("failed to serialize reply: {e}")))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Any method other than POST on `/order`.
pub async fn order_method_not_supported() -> ApiError {
    ApiError::InvalidRequest("only POST is supported".to_string())
}

/// Acknowledges a feedback submission.
///
/// The body is logged and otherwise ignored. A body that cannot be read
/// (transport error or over the size limit) answers 204.
pub async fn submit_feedback(State(state): State<AppState>, body: Body) -> StatusCode {
    match axum::body::to_bytes(body, state.config.max_body_bytes).await {
        Ok(bytes) => {
            info!(feedback = %String::from_utf8_lossy(&bytes), "Feedback received");
            StatusCode::OK
        }
        Err(e) => {
            warn!(error = %e, "Failed to read feedback body");
            StatusCode::NO_CONTENT
        }
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    "OK"
}

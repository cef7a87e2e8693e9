//! # Order API
//!
//! HTTP server exposing the pricing engine.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order API Server                                │
//! │                                                                         │
//! │  Client ───► HTTP ($PORT) ───► Router ───► order-pricing-core          │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                              TraceLayer                                 │
//! │                           (request spans)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP port (default: 9000)
//! - `BIND_ADDR` - bind address (default: 0.0.0.0)
//! - `MAX_BODY_BYTES` - request body limit (default: 1MB)
//! - `RUST_LOG` - log filter

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{any, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            config: Arc::new(config),
        }
    }
}

/// Builds the application router.
///
/// Handlers that read a body enforce `max_body_bytes` themselves, so an
/// oversized order answers 400 and oversized feedback answers 204.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/order",
            post(handlers::create_order).fallback(handlers::order_method_not_supported),
        )
        .route("/feedback", any(handlers::submit_feedback))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

//! # order-pricing-core: Pure Pricing Logic
//!
//! This crate holds the only domain logic of the order service: turning an
//! order into a taxed, discounted total. Everything else (HTTP, JSON, ports)
//! lives in `order-api`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Pricing Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    order-api (Axum)                             │   │
//! │  │    POST /order ──► parse JSON ──► calculate_total ──► status    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ order-pricing-core (THIS CRATE) ★                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ tax_table │  │  pricing  │  │   │
//! │  │   │   Order   │  │   Money   │  │  28 codes │  │ tiers and │  │   │
//! │  │   │   Tier    │  │ (micros)  │  │           │  │   bands   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED MUTABLE STATE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Order, DiscountTier, TaxRate
//! - [`money`] - Money type with integer arithmetic
//! - [`tax_table`] - Country code → tax rate
//! - [`validation`] - Order shape and country checks
//! - [`pricing`] - The pricing calculation
//! - [`error`] - Rejected / Unavailable outcomes
//!
//! ## Example Usage
//!
//! ```rust
//! use order_pricing_core::{calculate_total, Order, PricingError};
//!
//! let order = Order::new(vec![50.0], vec![2], "IT", "HALF PRICE");
//! assert_eq!(calculate_total(&order).unwrap().to_decimal(), 62.5);
//!
//! let order = Order::new(vec![50.0], vec![2], "IT", "BLACK FRIDAY");
//! assert!(matches!(
//!     calculate_total(&order),
//!     Err(PricingError::Unavailable { .. })
//! ));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod tax_table;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{PricingError, PricingResult, ValidationError};
pub use money::Money;
pub use pricing::calculate_total;
pub use tax_table::tax_rate_for;
pub use types::{DiscountTier, Order, TaxRate};

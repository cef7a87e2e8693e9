//! # Error Types
//!
//! Domain-specific error types for order-pricing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  order-pricing-core errors (this file)                                 │
//! │  ├── PricingError     - The two non-amount pricing outcomes            │
//! │  │   ├── Rejected     - wraps ValidationError (client error)           │
//! │  │   └── Unavailable  - discount tier is disabled                      │
//! │  └── ValidationError  - Why an order was rejected                      │
//! │                                                                         │
//! │  order-api errors (separate crate)                                     │
//! │  └── ApiError         - What the HTTP client sees (status code)        │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError → ApiError → HTTP response       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, country, tier)
//! 3. A zero total is a valid amount, never an error signal

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// The non-amount outcomes of a pricing calculation.
///
/// A successful calculation is `Ok(Money)`; these are the other two branches
/// of the three-way outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The order cannot be priced as submitted.
    ///
    /// ## When This Occurs
    /// - `prices` and `quantities` have different lengths
    /// - A price or quantity is negative
    /// - The country code is not in the tax table
    /// - The discount tier is empty
    #[error("Order rejected: {0}")]
    Rejected(#[from] ValidationError),

    /// The requested discount tier exists but is disabled.
    ///
    /// ## User Workflow
    /// ```text
    /// POST /order { reduction: "BLACK FRIDAY" }
    ///      │
    ///      ▼
    /// Unavailable { tier: "BLACK FRIDAY" }
    ///      │
    ///      ▼
    /// HTTP 404
    /// ```
    #[error("Discount tier '{tier}' is not available")]
    Unavailable { tier: String },
}

impl PricingError {
    /// Returns true for the client-error branch of the outcome.
    pub fn is_rejected(&self) -> bool {
        matches!(self, PricingError::Rejected(_))
    }

    /// Returns true for the not-found branch of the outcome.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, PricingError::Unavailable { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Reasons an order is rejected before or during pricing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Prices and quantities are not index-aligned.
    #[error("prices has {prices} entries but quantities has {quantities}")]
    LengthMismatch { prices: usize, quantities: usize },

    /// A line item has a price below zero.
    #[error("price at line {index} must not be negative")]
    NegativePrice { index: usize },

    /// A line item has a price that is NaN or infinite.
    #[error("price at line {index} is not a finite number")]
    NonFinitePrice { index: usize },

    /// A line item has a quantity below zero.
    #[error("quantity at line {index} must not be negative")]
    NegativeQuantity { index: usize },

    /// Country code is not a key of the tax table.
    #[error("country '{0}' is not supported")]
    UnknownCountry(String),

    /// Discount tier is empty.
    #[error("discount tier is required")]
    MissingDiscountTier,

    /// The order total does not fit the money representation.
    #[error("order total is too large")]
    AmountOverflow,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

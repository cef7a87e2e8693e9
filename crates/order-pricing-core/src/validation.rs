//! # Validation Module
//!
//! Input checks that decide whether an order can be priced at all.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (order-api)                                     │
//! │  └── JSON deserialization (malformed body → 400)                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── prices / quantities are index-aligned                             │
//! │  ├── no negative or non-finite price, no negative quantity             │
//! │  └── country is in the tax table                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: pricing (tier rules)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use order_pricing_core::validation::{validate_country, validate_line_items};
//!
//! let lines = validate_line_items(&[100.0], &[10]).unwrap();
//! assert_eq!(lines.len(), 1);
//!
//! assert!(validate_country("DE").is_ok());
//! assert!(validate_country("US").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::tax_table::tax_rate_for;
use crate::types::TaxRate;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A validated line item: unit price and a non-negative quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub unit_price: Money,
    pub quantity: i64,
}

impl LineItem {
    /// Unit price × quantity, `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a single unit price and converts it to [`Money`].
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is a free item)
pub fn validate_price(index: usize, price: f64) -> ValidationResult<Money> {
    if price.is_nan() || price.is_infinite() {
        return Err(ValidationError::NonFinitePrice { index });
    }

    if price < 0.0 {
        return Err(ValidationError::NegativePrice { index });
    }

    Money::from_decimal(price).ok_or(ValidationError::AmountOverflow)
}

/// Validates a single quantity.
///
/// ## Rules
/// - Must be non-negative (zero lines contribute nothing)
pub fn validate_quantity(index: usize, quantity: i64) -> ValidationResult<i64> {
    if quantity < 0 {
        return Err(ValidationError::NegativeQuantity { index });
    }

    Ok(quantity)
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates index-aligned prices and quantities.
///
/// Lines are checked in order; the first offending line is reported.
pub fn validate_line_items(prices: &[f64], quantities: &[i64]) -> ValidationResult<Vec<LineItem>> {
    if prices.len() != quantities.len() {
        return Err(ValidationError::LengthMismatch {
            prices: prices.len(),
            quantities: quantities.len(),
        });
    }

    prices
        .iter()
        .zip(quantities)
        .enumerate()
        .map(|(index, (&price, &quantity))| {
            Ok(LineItem {
                unit_price: validate_price(index, price)?,
                quantity: validate_quantity(index, quantity)?,
            })
        })
        .collect()
}

// =============================================================================
// Country Validators
// =============================================================================

/// Validates a country code and returns its tax rate.
pub fn validate_country(country: &str) -> ValidationResult<TaxRate> {
    tax_rate_for(country).ok_or_else(|| ValidationError::UnknownCountry(country.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================

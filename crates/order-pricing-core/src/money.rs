//! # Money Module
//!
//! Provides the `Money` type for handling order amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Discount bands compare the taxed total against thresholds:            │
//! │    total >= 50000  → ×0.85                                              │
//! │                                                                         │
//! │  With f32 arithmetic, sums near a threshold land on either side of    │
//! │  it depending on the order the lines are added in.                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Micro-Units                                      │
//! │    Prices are converted once, at the boundary, to millionths of a      │
//! │    currency unit. Line totals, tax and discount are integer math at    │
//! │    that precision; the result is rounded to the cent exactly once.     │
//! │                                                                         │
//! │  Rounding each unit price to the cent first would be wrong:            │
//! │    0.005 × 1000 = 5.00, but round(0.005) × 1000 = 10.00                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use order_pricing_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let line = price.checked_multiply_quantity(3).unwrap();
//! assert_eq!(line.cents(), 3297);
//!
//! // Sub-cent prices keep their precision until the final rounding.
//! let parsed = Money::from_decimal(0.005).unwrap();
//! assert_eq!(parsed.checked_multiply_quantity(1000), Some(Money::from_units(5)));
//! ```

use std::fmt;

use crate::types::TaxRate;

/// Micro-units in one cent.
const MICROS_PER_CENT: i64 = 10_000;

/// Micro-units in one major currency unit.
const MICROS_PER_UNIT: i64 = 1_000_000;

/// Basis points in 100%.
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in micro-units (1/1,000,000 of a currency unit).
///
/// ## Design Decisions
/// - **i64 micro-units**: six decimal places of precision, totals up to
///   about 9.2 trillion units; anything larger is an overflow
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Checked multiplication**: overflow becomes a rejected order, not a panic
/// - **Cents only at the edges**: [`Money::cents`] and [`Money::round_to_cent`]
///   are the only places precision is dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use order_pricing_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * MICROS_PER_CENT)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units * MICROS_PER_UNIT)
    }

    /// Converts a decimal wire amount to micro-units.
    ///
    /// Returns `None` for NaN, infinities and values outside the i64 range.
    ///
    /// ## Example
    /// ```rust
    /// use order_pricing_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(12.5), Some(Money::from_cents(1250)));
    /// assert!(Money::from_decimal(f64::NAN).is_none());
    /// ```
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let micros = (value * MICROS_PER_UNIT as f64).round();
        if micros.abs() >= i64::MAX as f64 {
            return None;
        }

        Some(Money(micros as i64))
    }

    /// Returns the amount rounded to the nearest cent (half away from zero).
    #[inline]
    pub fn cents(&self) -> i64 {
        round_div(self.0 as i128, MICROS_PER_CENT as i128) as i64
    }

    /// Drops sub-cent precision.
    #[inline]
    pub fn round_to_cent(&self) -> Money {
        Money::from_cents(self.cents())
    }

    /// Returns the cent-rounded amount as a decimal number, for serialization.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.cents() as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies by a line-item quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use order_pricing_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.checked_multiply_quantity(3).unwrap().cents(), 897);
    /// assert!(Money::from_units(5_000_000_000_000)
    ///     .checked_multiply_quantity(2)
    ///     .is_none());
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Calculates the tax owed on this amount.
    ///
    /// ## Implementation
    /// Integer math: `(amount * rate + 5000) / 10000`, at micro-unit precision.
    ///
    /// ## Example
    /// ```rust
    /// use order_pricing_core::money::Money;
    /// use order_pricing_core::types::TaxRate;
    ///
    /// let raw = Money::from_units(1000);
    /// let tax = raw.calculate_tax(TaxRate::from_bps(2000)); // 20%
    /// assert_eq!(tax, Money::from_units(200));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money(round_bps(self.0, rate.bps()))
    }

    /// Adds tax to this amount, `None` on overflow.
    pub fn checked_with_tax(&self, rate: TaxRate) -> Option<Money> {
        self.checked_add(self.calculate_tax(rate))
    }

    /// Scales the amount by a multiplier expressed in basis points.
    ///
    /// `10000` leaves the amount unchanged, `8500` is ×0.85.
    ///
    /// ## Example
    /// ```rust
    /// use order_pricing_core::money::Money;
    ///
    /// let taxed = Money::from_units(1200);
    /// assert_eq!(taxed.apply_multiplier_bps(9700).cents(), 116_400);
    /// ```
    pub fn apply_multiplier_bps(&self, multiplier_bps: u32) -> Money {
        Money(round_bps(self.0, multiplier_bps))
    }
}

/// Integer division rounding half away from zero.
fn round_div(value: i128, divisor: i128) -> i128 {
    if value >= 0 {
        (value + divisor / 2) / divisor
    } else {
        (value - divisor / 2) / divisor
    }
}

/// `amount * bps / 10000`, rounded, computed in i128.
fn round_bps(amount: i64, bps: u32) -> i64 {
    round_div(amount as i128 * bps as i128, BPS_SCALE) as i64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Cent-rounded decimal rendering, e.g. `1164.00`, used in log lines.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents();
        let sign = if cents < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (cents / 100).abs(), (cents % 100).abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

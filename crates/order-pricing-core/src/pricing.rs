//! # Pricing Engine
//!
//! Computes the total for an [`Order`].
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        calculate_total(order)                           │
//! │                                                                         │
//! │  validate_line_items ──► Rejected (length, negative, non-finite)       │
//! │       │                                                                 │
//! │  validate_country ─────► Rejected (not in tax table)                   │
//! │       │                                                                 │
//! │  raw   = Σ price[i] × quantity[i]                                      │
//! │  taxed = raw + raw × rate[country]                                     │
//! │       │                                                                 │
//! │  tier: ""             ─► Rejected                                      │
//! │        "BLACK FRIDAY" ─► Unavailable                                   │
//! │        "STANDARD"     ─► taxed × band multiplier                       │
//! │        "HALF PRICE"   ─► taxed × 0.5                                   │
//! │        other          ─► taxed                                         │
//! │       │                                                                 │
//! │  Ok(total rounded to the cent)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every intermediate amount keeps micro-unit precision; band thresholds are
//! compared against the unrounded taxed total.
//!
//! The function is pure: no shared state, safe to call from any thread.

use tracing::debug;

use crate::error::{PricingError, PricingResult, ValidationError};
use crate::money::Money;
use crate::types::{DiscountTier, Order};
use crate::validation::{validate_country, validate_line_items, LineItem};

/// Multiplier that leaves an amount unchanged.
pub const NO_DISCOUNT_BPS: u32 = 10_000;

/// Multiplier for the `HALF PRICE` tier.
pub const HALF_PRICE_BPS: u32 = 5_000;

/// `STANDARD` tier bands as (minimum taxed total, multiplier in bps).
///
/// Sorted by threshold, highest first; the first band the total reaches wins.
pub const STANDARD_BANDS: [(Money, u32); 5] = [
    (Money::from_units(50_000), 8_500),
    (Money::from_units(10_000), 9_000),
    (Money::from_units(7_000), 9_300),
    (Money::from_units(5_000), 9_500),
    (Money::from_units(1_000), 9_700),
];

/// Prices an order.
///
/// ## Returns
/// - `Ok(total)` — taxed and discounted total, never negative
/// - `Err(PricingError::Rejected(_))` — malformed order or empty tier
/// - `Err(PricingError::Unavailable { .. })` — the `BLACK FRIDAY` tier
///
/// ## Example
/// ```rust
/// use order_pricing_core::{calculate_total, Money, Order};
///
/// let order = Order::new(vec![100.0], vec![10], "DE", "STANDARD");
/// assert_eq!(calculate_total(&order), Ok(Money::from_units(1164)));
/// ```
pub fn calculate_total(order: &Order) -> PricingResult<Money> {
    let lines = validate_line_items(&order.prices, &order.quantities)?;
    let tax_rate = validate_country(&order.country)?;

    let raw = raw_total(&lines)?;
    debug!(country = %order.country, total = %raw, "Total before tax");

    let taxed = raw
        .checked_with_tax(tax_rate)
        .ok_or(ValidationError::AmountOverflow)?;
    debug!(tax_bps = tax_rate.bps(), total = %taxed, "Total before discount");

    let multiplier = discount_multiplier(&order.reduction, taxed)?;
    let total = taxed.apply_multiplier_bps(multiplier);
    debug!(tier = %order.reduction, multiplier_bps = multiplier, total = %total, "Total after discount");

    Ok(total.round_to_cent())
}

/// Sums `unit_price × quantity` over all lines.
pub fn raw_total(lines: &[LineItem]) -> Result<Money, ValidationError> {
    lines.iter().try_fold(Money::zero(), |acc, line| {
        line.line_total()
            .and_then(|amount| acc.checked_add(amount))
            .ok_or(ValidationError::AmountOverflow)
    })
}

/// Resolves the multiplier (in bps) a tier applies to a taxed total.
///
/// The empty and `BLACK FRIDAY` tiers have no multiplier: they end the
/// calculation with a rejection or an unavailable outcome.
pub fn discount_multiplier(tier: &DiscountTier, taxed: Money) -> PricingResult<u32> {
    match tier {
        DiscountTier::Standard => Ok(standard_multiplier(taxed)),
        DiscountTier::HalfPrice => Ok(HALF_PRICE_BPS),
        DiscountTier::Unset => Err(ValidationError::MissingDiscountTier.into()),
        DiscountTier::BlackFriday => Err(PricingError::Unavailable {
            tier: tier.label().to_string(),
        }),
        // Unrecognized labels are priced without a discount.
        DiscountTier::Other(_) => Ok(NO_DISCOUNT_BPS),
    }
}

/// `STANDARD` band multiplier for a taxed total.
pub fn standard_multiplier(taxed: Money) -> u32 {
    STANDARD_BANDS
        .iter()
        .find(|(threshold, _)| taxed >= *threshold)
        .map(|(_, bps)| *bps)
        .unwrap_or(NO_DISCOUNT_BPS)
}

// =============================================================================
// Unit Tests
// =============================================================================

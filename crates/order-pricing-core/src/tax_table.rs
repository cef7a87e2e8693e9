//! # Country Tax Table
//!
//! Fixed mapping from country code to tax rate. The table is a `static`
//! array: read-only for the lifetime of the process and shared across
//! threads without locking.

use crate::types::TaxRate;

/// Every supported country with its tax rate, in basis points.
pub static COUNTRY_TAX_RATES: [(&str, TaxRate); 28] = [
    ("DE", TaxRate::from_bps(2000)),
    ("UK", TaxRate::from_bps(2100)),
    ("FR", TaxRate::from_bps(2000)),
    ("IT", TaxRate::from_bps(2500)),
    ("ES", TaxRate::from_bps(1900)),
    ("PL", TaxRate::from_bps(2100)),
    ("RO", TaxRate::from_bps(2000)),
    ("NL", TaxRate::from_bps(2000)),
    ("BE", TaxRate::from_bps(2400)),
    ("EL", TaxRate::from_bps(2000)),
    ("CZ", TaxRate::from_bps(1900)),
    ("PT", TaxRate::from_bps(2300)),
    ("HU", TaxRate::from_bps(2700)),
    ("SE", TaxRate::from_bps(2300)),
    ("AT", TaxRate::from_bps(2200)),
    ("BG", TaxRate::from_bps(2100)),
    ("DK", TaxRate::from_bps(2100)),
    ("FI", TaxRate::from_bps(1700)),
    ("SK", TaxRate::from_bps(1800)),
    ("IE", TaxRate::from_bps(2100)),
    ("HR", TaxRate::from_bps(2300)),
    ("LT", TaxRate::from_bps(2300)),
    ("SI", TaxRate::from_bps(2400)),
    ("LV", TaxRate::from_bps(2000)),
    ("EE", TaxRate::from_bps(2200)),
    ("CY", TaxRate::from_bps(2100)),
    ("LU", TaxRate::from_bps(2500)),
    ("MT", TaxRate::from_bps(2000)),
];

/// Looks up the tax rate for a country code. Codes are matched exactly.
///
/// ## Example
/// ```rust
/// use order_pricing_core::tax_table::tax_rate_for;
///
/// assert_eq!(tax_rate_for("DE").map(|r| r.bps()), Some(2000));
/// assert!(tax_rate_for("US").is_none());
/// assert!(tax_rate_for("de").is_none());
/// ```
pub fn tax_rate_for(country: &str) -> Option<TaxRate> {
    COUNTRY_TAX_RATES
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, rate)| *rate)
}

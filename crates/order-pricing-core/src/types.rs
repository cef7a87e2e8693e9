//! # Domain Types
//!
//! Core domain types used by the pricing engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │  DiscountTier   │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  prices         │   │  Standard       │   │  bps (u32)      │       │
//! │  │  quantities     │   │  HalfPrice      │   │  2000 = 20%     │       │
//! │  │  country        │   │  BlackFriday    │   └─────────────────┘       │
//! │  │  reduction ─────┼──►│  Unset          │                             │
//! │  └─────────────────┘   │  Other(label)   │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 2000 bps = 20%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Discount Tier
// =============================================================================

/// The discount label attached to an order.
///
/// Parsed from the raw wire label; anything outside the recognized set is
/// kept verbatim in [`DiscountTier::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum DiscountTier {
    /// `"STANDARD"`: threshold bands on the taxed total.
    Standard,
    /// `"HALF PRICE"`: ×0.5.
    HalfPrice,
    /// `"BLACK FRIDAY"`: disabled, orders using it are unavailable.
    BlackFriday,
    /// `""`: no tier supplied, orders using it are rejected.
    #[default]
    Unset,
    /// Any other label. Priced without a discount.
    Other(String),
}

impl DiscountTier {
    pub const STANDARD: &'static str = "STANDARD";
    pub const HALF_PRICE: &'static str = "HALF PRICE";
    pub const BLACK_FRIDAY: &'static str = "BLACK FRIDAY";

    /// Parses a wire label. Matching is exact and case-sensitive.
    pub fn parse(label: &str) -> Self {
        match label {
            "" => DiscountTier::Unset,
            Self::STANDARD => DiscountTier::Standard,
            Self::HALF_PRICE => DiscountTier::HalfPrice,
            Self::BLACK_FRIDAY => DiscountTier::BlackFriday,
            other => DiscountTier::Other(other.to_string()),
        }
    }

    /// Returns the wire label.
    pub fn label(&self) -> &str {
        match self {
            DiscountTier::Standard => Self::STANDARD,
            DiscountTier::HalfPrice => Self::HALF_PRICE,
            DiscountTier::BlackFriday => Self::BLACK_FRIDAY,
            DiscountTier::Unset => "",
            DiscountTier::Other(label) => label,
        }
    }
}

impl From<String> for DiscountTier {
    fn from(label: String) -> Self {
        DiscountTier::parse(&label)
    }
}

impl From<&str> for DiscountTier {
    fn from(label: &str) -> Self {
        DiscountTier::parse(label)
    }
}

impl fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order to be priced.
///
/// ## Wire Format
/// ```json
/// { "prices": [100.0], "quantities": [10], "country": "DE", "reduction": "STANDARD" }
/// ```
/// Field names match in any letter case (`Prices`, `PRICES`, ...). Missing
/// or `null` fields default to empty, so an order without `reduction` is
/// priced as [`DiscountTier::Unset`]. Unknown fields are ignored and a
/// repeated field keeps its last value.
///
/// Prices stay as raw decimals here; they are converted to
/// [`Money`](crate::Money) during validation so a negative or non-finite
/// value can be reported with its line index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Order {
    /// Unit price per line item.
    pub prices: Vec<f64>,

    /// Quantity per line item, index-aligned with `prices`.
    pub quantities: Vec<i64>,

    /// Two-letter country code selecting the tax rate.
    pub country: String,

    /// Discount tier label.
    pub reduction: DiscountTier,
}

impl Order {
    /// Creates an order from its parts.
    pub fn new(
        prices: Vec<f64>,
        quantities: Vec<i64>,
        country: impl Into<String>,
        reduction: impl Into<DiscountTier>,
    ) -> Self {
        Order {
            prices,
            quantities,
            country: country.into(),
            reduction: reduction.into(),
        }
    }
}

/// Order fields, matched case-insensitively.
enum OrderField {
    Prices,
    Quantities,
    Country,
    Reduction,
    Ignore,
}

impl OrderField {
    fn from_key(key: &str) -> Self {
        if key.eq_ignore_ascii_case("prices") {
            OrderField::Prices
        } else if key.eq_ignore_ascii_case("quantities") {
            OrderField::Quantities
        } else if key.eq_ignore_ascii_case("country") {
            OrderField::Country
        } else if key.eq_ignore_ascii_case("reduction") {
            OrderField::Reduction
        } else {
            OrderField::Ignore
        }
    }
}

struct OrderVisitor;

impl<'de> Visitor<'de> for OrderVisitor {
    type Value = Order;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an order object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Order, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut order = Order::default();

        while let Some(key) = map.next_key::<String>()? {
            match OrderField::from_key(&key) {
                OrderField::Prices => {
                    if let Some(prices) = map.next_value::<Option<Vec<f64>>>()? {
                        order.prices = prices;
                    }
                }
                OrderField::Quantities => {
                    if let Some(quantities) = map.next_value::<Option<Vec<i64>>>()? {
                        order.quantities = quantities;
                    }
                }
                OrderField::Country => {
                    if let Some(country) = map.next_value::<Option<String>>()? {
                        order.country = country;
                    }
                }
                OrderField::Reduction => {
                    if let Some(label) = map.next_value::<Option<String>>()? {
                        order.reduction = DiscountTier::from(label);
                    }
                }
                OrderField::Ignore => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(order)
    }
}

impl<'de> Deserialize<'de> for Order {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_tier_parse() {
        assert_eq!(DiscountTier::parse("STANDARD"), DiscountTier::Standard);
        assert_eq!(DiscountTier::parse("HALF PRICE"), DiscountTier::HalfPrice);
        assert_eq!(DiscountTier::parse("BLACK FRIDAY"), DiscountTier::BlackFriday);
        assert_eq!(DiscountTier::parse(""), DiscountTier::Unset);
        assert_eq!(
            DiscountTier::parse("standard"),
            DiscountTier::Other("standard".to_string())
        );
    }

    #[test]
    fn test_discount_tier_label_round_trips() {
        for label in ["STANDARD", "HALF PRICE", "BLACK FRIDAY", "", "VIP"] {
            assert_eq!(DiscountTier::parse(label).label(), label);
        }
    }

    #[test]
    fn test_order_deserialize_lowercase() {
        let order: Order = serde_json::from_str(
            r#"{"prices":[100.0,2.5],"quantities":[10,4],"country":"DE","reduction":"STANDARD"}"#,
        )
        .unwrap();

        assert_eq!(order.prices, vec![100.0, 2.5]);
        assert_eq!(order.quantities, vec![10, 4]);
        assert_eq!(order.country, "DE");
        assert_eq!(order.reduction, DiscountTier::Standard);
    }

    #[test]
    fn test_order_deserialize_capitalized_fields() {
        let order: Order = serde_json::from_str(
            r#"{"Prices":[50],"Quantities":[2],"Country":"IT","Reduction":"HALF PRICE"}"#,
        )
        .unwrap();

        assert_eq!(order, Order::new(vec![50.0], vec![2], "IT", "HALF PRICE"));
    }

    #[test]
    fn test_order_missing_fields_default() {
        let order: Order = serde_json::from_str(r#"{"country":"FR"}"#).unwrap();
        assert!(order.prices.is_empty());
        assert!(order.quantities.is_empty());
        assert_eq!(order.reduction, DiscountTier::Unset);
    }

    #[test]
    fn test_order_field_names_match_any_case() {
        let order: Order = serde_json::from_str(
            r#"{"PRICES":[1.5],"qUaNtItIeS":[4],"COUNTRY":"FR","reDuction":"STANDARD"}"#,
        )
        .unwrap();

        assert_eq!(order, Order::new(vec![1.5], vec![4], "FR", "STANDARD"));
    }

    #[test]
    fn test_order_null_and_unknown_fields() {
        let order: Order = serde_json::from_str(
            r#"{"prices":null,"country":"DE","reduction":null,"coupon":{"code":"X"},"notes":[1,2]}"#,
        )
        .unwrap();

        assert_eq!(order, Order::new(vec![], vec![], "DE", ""));
    }

    #[test]
    fn test_order_repeated_field_keeps_last() {
        let order: Order =
            serde_json::from_str(r#"{"country":"DE","Country":"IT"}"#).unwrap();
        assert_eq!(order.country, "IT");
    }

    #[test]
    fn test_order_rejects_wrong_types() {
        assert!(serde_json::from_str::<Order>(r#"{"quantities":[1.5]}"#).is_err());
        assert!(serde_json::from_str::<Order>(r#"{"prices":"100"}"#).is_err());
        assert!(serde_json::from_str::<Order>(r#"[1, 2]"#).is_err());
    }
}

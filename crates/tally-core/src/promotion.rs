//! # Promotion Module
//!
//! Pluggable pricing promotions applied at purchase time.
//!
//! ## Where Promotions Sit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Price Computation                                  │
//! │                                                                         │
//! │  Product.buy(quantity)                                                  │
//! │       │                                                                 │
//! │       ├── promotion attached? ──► promotion.apply(price, quantity)     │
//! │       │                           (REPLACES the plain total)           │
//! │       │                                                                 │
//! │       └── no promotion ─────────► price * quantity                     │
//! │                                                                         │
//! │  Promotions are pure: no state, no mutation, no failure modes.         │
//! │  Quantity validation is the product's job, done before apply().        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::Promotion;
//!
//! let promo = Promotion::percentage_discount(10.0);
//! assert_eq!(promo.apply(1450.0, 1), 1305.0);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Promotion
// =============================================================================

/// A pricing strategy attached to at most one product per attachment.
///
/// An equal promotion value may be attached to many products; it holds no
/// per-product state. `apply` is a pure function of its arguments.
///
/// ## Variant Dispatch
/// Modeled as a tagged enum rather than a trait object: the set of
/// strategies is closed, and enum dispatch keeps promotions `Clone`,
/// comparable, and serializable for catalog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Promotion {
    /// Flat percentage off the whole line.
    ///
    /// The percentage is deliberately NOT clamped to [0, 100]: values
    /// outside that range pass through and produce negative or unchanged
    /// totals. This is pass-through behavior, not a validated business
    /// rule.
    PercentageDiscount { percentage: f64 },

    /// The first unit of the batch is full price; every unit after it
    /// is half price. Applied over the whole purchased batch in one
    /// call, NOT as an every-second-unit pairing scheme.
    SecondUnitHalfPrice,

    /// Every third unit is free: pay for 2 out of each complete group
    /// of 3. Remainder units (quantity mod 3) are paid in full.
    BuyTwoGetOneFree,
}

impl Promotion {
    /// Creates a percentage discount promotion.
    #[inline]
    pub fn percentage_discount(percentage: f64) -> Self {
        Promotion::PercentageDiscount { percentage }
    }

    /// Applies the promotion to a purchase, returning the charged total.
    ///
    /// The result REPLACES the plain `unit_price * quantity` computation;
    /// it is not a discount amount to subtract.
    ///
    /// Trusts the caller (the product) to have validated `quantity > 0`
    /// already; no validation happens here.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Promotion;
    ///
    /// // Second unit half price: 250 + 125
    /// assert_eq!(Promotion::SecondUnitHalfPrice.apply(250.0, 2), 375.0);
    ///
    /// // Buy 2 get 1 free: pay for 2 of 3
    /// assert_eq!(Promotion::BuyTwoGetOneFree.apply(500.0, 3), 1000.0);
    /// ```
    pub fn apply(&self, unit_price: f64, quantity: i64) -> f64 {
        match self {
            Promotion::PercentageDiscount { percentage } => {
                unit_price * quantity as f64 * (1.0 - percentage / 100.0)
            }
            Promotion::SecondUnitHalfPrice => {
                if quantity <= 1 {
                    unit_price * quantity as f64
                } else {
                    // Full price for the first unit, half price for each
                    // unit after it.
                    unit_price + (unit_price / 2.0) * (quantity - 1) as f64
                }
            }
            Promotion::BuyTwoGetOneFree => {
                let free_items = quantity / 3;
                let payable_items = quantity - free_items;
                unit_price * payable_items as f64
            }
        }
    }

    /// Human-readable label, shown in product summaries.
    pub fn label(&self) -> String {
        match self {
            Promotion::PercentageDiscount { percentage } => format!("{percentage}% off"),
            Promotion::SecondUnitHalfPrice => "Second unit half price".to_string(),
            Promotion::BuyTwoGetOneFree => "Buy 2 get 1 free".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_discount() {
        let promo = Promotion::percentage_discount(10.0);
        assert!((promo.apply(1450.0, 1) - 1305.0).abs() < 1e-9);
        assert!((promo.apply(100.0, 3) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_discount_is_not_clamped() {
        // Out-of-range percentages pass through untouched.
        let over = Promotion::percentage_discount(150.0);
        assert!((over.apply(100.0, 1) + 50.0).abs() < 1e-9);

        let negative = Promotion::percentage_discount(-10.0);
        assert!((negative.apply(100.0, 1) - 110.0).abs() < 1e-9);

        let zero = Promotion::percentage_discount(0.0);
        assert_eq!(zero.apply(100.0, 2), 200.0);
    }

    #[test]
    fn test_second_unit_half_price() {
        let promo = Promotion::SecondUnitHalfPrice;
        assert_eq!(promo.apply(250.0, 1), 250.0);
        assert_eq!(promo.apply(250.0, 2), 375.0); // 250 + 125
    }

    #[test]
    fn test_second_unit_half_price_larger_batches() {
        // The formula spans the whole remainder: 250 + 125 * (q - 1).
        let promo = Promotion::SecondUnitHalfPrice;
        assert_eq!(promo.apply(250.0, 3), 500.0);
        assert_eq!(promo.apply(250.0, 4), 625.0);
    }

    #[test]
    fn test_buy_two_get_one_free() {
        let promo = Promotion::BuyTwoGetOneFree;
        assert_eq!(promo.apply(500.0, 3), 1000.0); // pay for 2
        assert_eq!(promo.apply(500.0, 4), 1500.0); // 1 free, 3 payable
        assert_eq!(promo.apply(500.0, 6), 2000.0); // 2 free, 4 payable
    }

    #[test]
    fn test_buy_two_get_one_free_remainders_paid_in_full() {
        let promo = Promotion::BuyTwoGetOneFree;
        assert_eq!(promo.apply(500.0, 1), 500.0);
        assert_eq!(promo.apply(500.0, 2), 1000.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            Promotion::percentage_discount(10.0).label(),
            "10% off"
        );
        assert_eq!(
            Promotion::SecondUnitHalfPrice.label(),
            "Second unit half price"
        );
        assert_eq!(Promotion::BuyTwoGetOneFree.label(), "Buy 2 get 1 free");
    }

    #[test]
    fn test_promotion_config_round_trip() {
        let promo = Promotion::percentage_discount(10.0);
        let json = serde_json::to_string(&promo).unwrap();
        assert_eq!(json, r#"{"type":"percentage_discount","percentage":10.0}"#);

        let parsed: Promotion = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, promo);
    }
}

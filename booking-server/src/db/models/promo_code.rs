//! PromoCode Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_record;

/// Discount kind applied at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Flat,
}

/// Promo code model
///
/// Read-only from the booking flow's perspective. Codes are stored
/// upper-cased; lookups upper-case their input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    #[serde(
        default,
        with = "serde_record::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Thing>,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: i64,
}

impl PromoCode {
    pub fn new(code: impl Into<String>, discount_type: DiscountType, discount_value: i64) -> Self {
        Self {
            id: None,
            code: code.into().to_uppercase(),
            discount_type,
            discount_value,
        }
    }

    /// Discount amount for a given subtotal
    ///
    /// Percentage discounts scale with the subtotal; flat discounts are
    /// capped at the subtotal so a total can never go negative.
    pub fn discount_for(&self, subtotal: i64) -> i64 {
        match self.discount_type {
            DiscountType::Percentage => subtotal * self.discount_value / 100,
            DiscountType::Flat => self.discount_value.min(subtotal),
        }
    }

    /// Human-readable confirmation shown at checkout
    pub fn applied_message(&self) -> String {
        match self.discount_type {
            DiscountType::Percentage => format!("{}% off applied", self.discount_value),
            DiscountType::Flat => format!("₹{} off applied", self.discount_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_discount_scales_with_subtotal() {
        let promo = PromoCode::new("SAVE10", DiscountType::Percentage, 10);
        assert_eq!(promo.discount_for(1000), 100);
        assert_eq!(promo.discount_for(0), 0);
    }

    #[test]
    fn flat_discount_is_capped_at_subtotal() {
        let promo = PromoCode::new("FLAT100", DiscountType::Flat, 100);
        assert_eq!(promo.discount_for(50), 50);
        assert_eq!(promo.discount_for(1000), 100);
    }

    #[test]
    fn codes_are_stored_upper_cased() {
        let promo = PromoCode::new("save10", DiscountType::Percentage, 10);
        assert_eq!(promo.code, "SAVE10");
    }

    #[test]
    fn applied_messages_name_the_discount() {
        let percent = PromoCode::new("SAVE10", DiscountType::Percentage, 10);
        assert_eq!(percent.applied_message(), "10% off applied");

        let flat = PromoCode::new("FLAT100", DiscountType::Flat, 100);
        assert_eq!(flat.applied_message(), "₹100 off applied");
    }
}

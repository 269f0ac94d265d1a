//! Order summary pricing shown on the cart and checkout pages.

use dukaan_core::format_currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartEngine;

/// Shipping and tax rules applied to a cart subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingConfig {
    /// Subtotals strictly above this ship free.
    pub free_shipping_threshold: Decimal,
    /// Flat shipping fee charged below the threshold.
    pub shipping_fee: Decimal,
    /// Tax rate applied to the subtotal (0.18 = 18%).
    pub tax_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Decimal::from(5000),
            shipping_fee: Decimal::from(499),
            tax_rate: Decimal::new(18, 2),
        }
    }
}

/// Subtotal, shipping, tax and grand total for a cart.
///
/// No rounding is applied; formatting for display rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub item_count: u64,
}

impl OrderSummary {
    /// Price `cart` under `pricing`.
    #[must_use]
    pub fn for_cart(cart: &CartEngine, pricing: &PricingConfig) -> Self {
        Self::from_subtotal(cart.total(), cart.item_count(), pricing)
    }

    /// Price a subtotal directly.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal, item_count: u64, pricing: &PricingConfig) -> Self {
        let shipping = if subtotal <= Decimal::ZERO || subtotal > pricing.free_shipping_threshold {
            Decimal::ZERO
        } else {
            pricing.shipping_fee
        };
        let tax = subtotal.saturating_mul(pricing.tax_rate);

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal.saturating_add(shipping).saturating_add(tax),
            item_count,
        }
    }

    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }

    /// `"FREE"` or the formatted shipping fee.
    #[must_use]
    pub fn shipping_label(&self) -> String {
        if self.ships_free() {
            "FREE".to_string()
        } else {
            format_currency(self.shipping)
        }
    }
}

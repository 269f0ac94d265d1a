//! Cart line items and the cart engine.
//!
//! A line item is identified by its product ID together with its selected
//! variant options ([`LineKey`]). The engine guarantees:
//!
//! - no two line items share a key (adding an existing key bumps quantity)
//! - every line item has `quantity >= 1`
//! - line items keep their insertion order

use dukaan_core::{LineKey, Product, ProductId, SelectedOptions};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One distinct (product, variant selection) entry in the cart.
///
/// Serialized as the product's own fields plus `quantity` and
/// `selectedOptions`, matching carts already stored by the browser storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
    #[serde(rename = "selectedOptions", default)]
    pub selected_options: SelectedOptions,
}

impl CartLineItem {
    /// A new line item with quantity 1.
    #[must_use]
    pub fn new(product: &Product, selected_options: SelectedOptions) -> Self {
        Self {
            product: product.display_snapshot(),
            quantity: 1,
            selected_options,
        }
    }

    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Identity of this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product.id.clone(), self.selected_options.clone())
    }

    /// Whether this line is the one identified by `product_id` and `options`.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, options: &SelectedOptions) -> bool {
        self.product.id == *product_id && self.selected_options == *options
    }

    /// Unit price times quantity, saturating at the `Decimal` bounds.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Ordered collection of cart line items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartEngine {
    items: Vec<CartLineItem>,
}

impl CartEngine {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from stored line items, repairing invariant violations.
    ///
    /// Lines with quantity 0 are dropped. Lines sharing a key are merged into
    /// the first occurrence with their quantities summed; carts stored before
    /// option keys were canonicalized can hold such duplicates.
    #[must_use]
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                warn!(product_id = %item.product.id, "Dropping stored cart line with zero quantity");
                continue;
            }
            match cart.position(&item.product.id, &item.selected_options) {
                Some(index) => {
                    warn!(key = %item.key(), "Merging duplicate stored cart line");
                    if let Some(existing) = cart.items.get_mut(index) {
                        existing.quantity = existing.quantity.saturating_add(item.quantity);
                    }
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct line items (not units; see [`Self::item_count`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line item identified by `product_id` and `options`.
    #[must_use]
    pub fn get(&self, product_id: &ProductId, options: &SelectedOptions) -> Option<&CartLineItem> {
        self.items
            .iter()
            .find(|item| item.matches(product_id, options))
    }

    fn position(&self, product_id: &ProductId, options: &SelectedOptions) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.matches(product_id, options))
    }

    /// Add one unit of `product` with `options`.
    ///
    /// Increments the matching line if present, otherwise appends a new line
    /// with quantity 1. Returns the line's quantity afterwards.
    pub fn add_item(&mut self, product: &Product, options: SelectedOptions) -> u32 {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.matches(&product.id, &options))
        {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(CartLineItem::new(product, options));
        1
    }

    /// Remove the matching line item. Returns whether one was removed.
    pub fn remove_item(&mut self, product_id: &ProductId, options: &SelectedOptions) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.matches(product_id, options));
        self.items.len() != before
    }

    /// Set the matching line's quantity to `new_quantity`.
    ///
    /// A quantity of zero or less removes the line, exactly like
    /// [`Self::remove_item`]. Quantities above `u32::MAX` are clamped.
    /// Returns whether a matching line existed.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        options: &SelectedOptions,
        new_quantity: i64,
    ) -> bool {
        if new_quantity <= 0 {
            return self.remove_item(product_id, options);
        }

        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        match self
            .items
            .iter_mut()
            .find(|item| item.matches(product_id, options))
        {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity over all lines. No rounding is applied.
    ///
    /// Saturates at `Decimal::MAX` (or `MIN`) instead of overflowing, so an
    /// absurd stored price cannot make the total panic.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(CartLineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

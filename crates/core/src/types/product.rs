//! Catalogue product records.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::id::ProductId;

/// Field names owned by cart line items; never carried as display fields.
pub const LINE_ITEM_FIELDS: &[&str] = &["quantity", "selectedOptions"];

/// A product as supplied by the catalogue.
///
/// Only `id`, `name`, `price` and `image` are interpreted. Every other field
/// (`originalPrice`, `discount`, `rating`, `colors`, ...) is kept verbatim in
/// [`Product::extra`] so stored records round-trip without loss.
///
/// Missing `name`/`image` default to empty and a missing `price` to zero.
///
/// ```
/// use dukaan_core::{Product, ProductId};
///
/// let product: Product = serde_json::from_str(
///     r#"{"id":1,"name":"Kurta","price":1299,"image":"/k.jpg","rating":4.5}"#,
/// ).unwrap();
/// assert_eq!(product.id, ProductId::from(1));
/// assert!(product.field("rating").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default, serialize_with = "serialize_price")]
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    /// Display fields the cart copies but does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Create a product with no extra display fields.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            extra: Map::new(),
        }
    }

    /// Attach a display field, ignoring names reserved for line items.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !LINE_ITEM_FIELDS.contains(&key.as_str()) {
            self.extra.insert(key, value.into());
        }
        self
    }

    /// Look up an uninterpreted display field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Copy of this product with line-item fields stripped from `extra`.
    ///
    /// Catalogue records occasionally arrive with `quantity` or
    /// `selectedOptions` already attached (a wishlist snapshot taken from a
    /// cart line, for example); those must not shadow the line's own fields.
    #[must_use]
    pub fn display_snapshot(&self) -> Self {
        let mut snapshot = self.clone();
        for field in LINE_ITEM_FIELDS {
            snapshot.extra.remove(*field);
        }
        snapshot
    }
}

/// Write prices as JSON numbers: integers when integral, floats otherwise.
fn serialize_price<S: Serializer>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract().is_zero() {
        if let Some(whole) = price.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match price.to_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => serializer.serialize_str(&price.to_string()),
    }
}

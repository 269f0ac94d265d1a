//! Variant option selections and line-item identity.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// The shopper's chosen value for each variant axis (e.g. `color`, `size`).
///
/// Options are kept sorted by axis name, so two selections compare equal
/// whenever they hold the same pairs, regardless of the order in which the
/// axes were chosen or serialized.
///
/// ```
/// use dukaan_core::SelectedOptions;
///
/// let a = SelectedOptions::from_pairs([("color", "red"), ("size", "M")]);
/// let b = SelectedOptions::from_pairs([("size", "M"), ("color", "red")]);
/// assert_eq!(a, b);
/// assert_eq!(a.canonical_key(), r#"{"color":"red","size":"M"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedOptions(BTreeMap<String, String>);

impl SelectedOptions {
    /// No options selected.
    #[must_use]
    pub const fn none() -> Self {
        Self(BTreeMap::new())
    }

    /// Build a selection from `(axis, value)` pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Set the value for an axis, returning the previous one.
    pub fn insert(&mut self, axis: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(axis.into(), value.into())
    }

    /// Chosen value for an axis.
    #[must_use]
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.0.get(axis).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(axis, value)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sorted-key JSON serialization of the selection.
    ///
    /// This is the option half of a line item's identity.
    #[must_use]
    pub fn canonical_key(&self) -> String {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect(),
        )
        .to_string()
    }

    /// Human-readable summary such as `"color: red, size: M"`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SelectedOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Identity of a cart line item: the product plus its variant selection.
///
/// A cart never holds two line items with the same key; adding a product
/// whose key is already present increments that line's quantity instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey {
    pub product_id: ProductId,
    pub options: SelectedOptions,
}

impl LineKey {
    #[must_use]
    pub const fn new(product_id: ProductId, options: SelectedOptions) -> Self {
        Self {
            product_id,
            options,
        }
    }

    /// Whether this key identifies the given product/options pair.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, options: &SelectedOptions) -> bool {
        self.product_id == *product_id && self.options == *options
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.product_id, self.options.canonical_key())
    }
}

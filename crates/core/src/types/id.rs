//! Product identifiers.
//!
//! Catalogue data identifies products either by number or by string, and both
//! shapes already exist in stored sessions. [`ProductId`] keeps whichever shape
//! it was given so that stored data round-trips unchanged.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product identifier as it appears in catalogue and stored cart data.
///
/// Equality is strict: `ProductId::Number(1)` and `ProductId::Text("1")` are
/// different products, exactly as they would be under `===` in the browser.
///
/// ```
/// use dukaan_core::ProductId;
///
/// assert_ne!(ProductId::from(1), ProductId::from("1"));
/// assert_eq!(serde_json::to_string(&ProductId::from(7)).unwrap(), "7");
/// assert_eq!(serde_json::to_string(&ProductId::from("sku-7")).unwrap(), "\"sku-7\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric catalogue ID.
    Number(i64),
    /// String catalogue ID (SKU, slug, ...).
    Text(String),
}

impl ProductId {
    /// Returns the numeric ID, if this is a numeric ID.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Returns the string ID, if this is a string ID.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

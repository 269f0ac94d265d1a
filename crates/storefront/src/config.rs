//! Cart configuration.
//!
//! The host page builds a [`CartConfig`] once at startup, either with
//! [`CartConfig::default`] or from a JSON document:
//!
//! ```json
//! {
//!   "cartKey": "cart",
//!   "wishlistKey": "wishlist",
//!   "pricing": { "freeShippingThreshold": 5000, "shippingFee": 499, "taxRate": 0.18 }
//! }
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::PricingConfig;

/// Default storage key for the cart.
pub const DEFAULT_CART_KEY: &str = "cart";
/// Default storage key for the wishlist.
pub const DEFAULT_WISHLIST_KEY: &str = "wishlist";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config value {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("Invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Storage keys and pricing rules for a [`crate::CartFacade`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CartConfig {
    /// Storage key holding the cart's JSON array.
    pub cart_key: String,
    /// Storage key holding the wishlist's JSON array.
    pub wishlist_key: String,
    /// Shipping and tax rules for order summaries.
    pub pricing: PricingConfig,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            cart_key: DEFAULT_CART_KEY.to_string(),
            wishlist_key: DEFAULT_WISHLIST_KEY.to_string(),
            pricing: PricingConfig::default(),
        }
    }
}

impl CartConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the document is not valid JSON of the
    /// expected shape, or `ConfigError::InvalidValue` if validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that keys are usable and pricing values are non-negative.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cart_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "cartKey",
                "must not be empty".to_string(),
            ));
        }
        if self.wishlist_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "wishlistKey",
                "must not be empty".to_string(),
            ));
        }
        if self.cart_key == self.wishlist_key {
            return Err(ConfigError::InvalidValue(
                "wishlistKey",
                format!("must differ from cartKey ({:?})", self.cart_key),
            ));
        }

        check_non_negative(
            "pricing.freeShippingThreshold",
            self.pricing.free_shipping_threshold,
        )?;
        check_non_negative("pricing.shippingFee", self.pricing.shipping_fee)?;
        check_non_negative("pricing.taxRate", self.pricing.tax_rate)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: Decimal) -> Result<(), ConfigError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ConfigError::InvalidValue(
            field,
            format!("must not be negative (got {value})"),
        ));
    }
    Ok(())
}

//! Dukaan Storefront - cart and wishlist state manager.
//!
//! The storefront runs entirely in the shopper's browser; the only state worth
//! modelling precisely is the cart and wishlist, persisted as two JSON blobs in
//! a key/value store.
//!
//! # Architecture
//!
//! - [`store`] - `KeyValueStore` trait, in-memory and file-backed stores
//! - [`cart`] - Line items keyed by product + variant options
//! - [`wishlist`] - Product snapshots keyed by product ID
//! - [`facade`] - `CartFacade`, the one object UI code holds
//! - [`pricing`] - Shipping/tax order summary
//! - [`config`] - Storage keys and pricing rules
//!
//! # Example
//!
//! ```
//! use dukaan_core::{Product, SelectedOptions};
//! use dukaan_storefront::{CartFacade, MemoryStore};
//! use rust_decimal::Decimal;
//!
//! let mut facade = CartFacade::new(MemoryStore::new());
//! let kurta = Product::new(1, "Cotton Kurta", Decimal::from(1299), "/kurta.jpg");
//!
//! facade.add_to_cart(&kurta, SelectedOptions::from_pairs([("size", "M")]));
//! facade.add_to_cart(&kurta, SelectedOptions::from_pairs([("size", "M")]));
//!
//! assert_eq!(facade.cart_items().len(), 1);
//! assert_eq!(facade.cart_total(), Decimal::from(2598));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod facade;
pub mod pricing;
pub mod store;
pub mod wishlist;

pub use cart::{CartEngine, CartLineItem};
pub use config::{CartConfig, ConfigError};
pub use error::{CartError, Result};
pub use facade::{CartFacade, SubscriptionId, parse_quantity};
pub use pricing::{OrderSummary, PricingConfig};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use wishlist::WishlistEngine;

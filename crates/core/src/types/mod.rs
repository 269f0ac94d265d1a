//! Core types for Dukaan.
//!
//! This module provides type-safe wrappers for storefront domain concepts.

pub mod id;
pub mod options;
pub mod price;
pub mod product;

pub use id::ProductId;
pub use options::{LineKey, SelectedOptions};
pub use price::{format_currency, format_currency_rounded};
pub use product::Product;

//! Dukaan Core - Shared storefront types.
//!
//! This crate provides the domain types used by the Dukaan storefront:
//! - `storefront` - Cart and wishlist state manager with browser-style storage
//! - `integration-tests` - Cross-crate behavioural tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage access. This keeps it lightweight and allows it to be used anywhere
//! (including `wasm32` builds that talk to `localStorage`).
//!
//! # Modules
//!
//! - [`types`] - Product records, product IDs, variant options, line-item
//!   identity, and currency formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

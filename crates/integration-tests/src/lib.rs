//! Integration tests for Dukaan.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p dukaan-integration-tests
//!
//! # With cart logging
//! RUST_LOG=dukaan_storefront=debug cargo test -p dukaan-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_facade` - Cart and wishlist behaviour through `CartFacade`
//! - `stored_sessions` - Rehydrating sessions written by the browser storefront
//!
//! This library holds the shared fixtures those tests use.

use std::sync::Once;

use dukaan_core::{Product, SelectedOptions};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Honours `RUST_LOG`; defaults to `warn` so degraded-persistence warnings
/// show up in failing test output.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A kurta offered in several colours and sizes.
#[must_use]
pub fn kurta() -> Product {
    Product::new(1, "Cotton Kurta", Decimal::from(1299), "/images/kurta.jpg")
        .with_field("originalPrice", 1999)
        .with_field("discount", 35)
        .with_field("rating", 4.5)
        .with_field("colors", serde_json::json!(["Indigo", "Maroon"]))
        .with_field("sizes", serde_json::json!(["S", "M", "L"]))
}

/// A saree with no variant axes.
#[must_use]
pub fn saree() -> Product {
    Product::new(2, "Banarasi Saree", Decimal::from(4500), "/images/saree.jpg")
        .with_field("rating", 4.8)
}

/// A low-priced accessory with a string ID.
#[must_use]
pub fn bangles() -> Product {
    Product::new("acc-7", "Glass Bangles", Decimal::new(24950, 2), "/images/bangles.jpg")
}

/// `{color, size}` selection, as the product details page builds it.
#[must_use]
pub fn variant(color: &str, size: &str) -> SelectedOptions {
    SelectedOptions::from_pairs([("color", color), ("size", size)])
}

//! Wishlist engine.
//!
//! A wishlist is a set of product snapshots keyed by product ID alone; there
//! are no variant options and no quantities. Entries keep the order in which
//! they were added.

use dukaan_core::{Product, ProductId};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistEngine {
    entries: Vec<Product>,
}

impl WishlistEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuild a wishlist from stored snapshots, keeping the first of any
    /// duplicate IDs.
    #[must_use]
    pub fn from_entries(entries: Vec<Product>) -> Self {
        let mut wishlist = Self::new();
        for entry in entries {
            if wishlist.contains(&entry.id) {
                warn!(product_id = %entry.id, "Dropping duplicate stored wishlist entry");
                continue;
            }
            wishlist.entries.push(entry);
        }
        wishlist
    }

    #[must_use]
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|entry| entry.id == *product_id)
    }

    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&Product> {
        self.entries.iter().find(|entry| entry.id == *product_id)
    }

    /// Add a snapshot of `product` unless its ID is already wishlisted.
    /// Returns whether it was inserted.
    pub fn add_item(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.entries.push(product.display_snapshot());
        true
    }

    /// Remove the entry for `product_id`. Returns whether one was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != *product_id);
        self.entries.len() != before
    }

    /// Add `product` if absent, remove it if present.
    /// Returns whether it is wishlisted afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove_item(&product.id) {
            false
        } else {
            self.add_item(product)
        }
    }
}

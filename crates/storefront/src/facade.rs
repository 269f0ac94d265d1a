//! The cart facade: the single object UI code talks to.
//!
//! [`CartFacade`] owns the cart, the wishlist, and the store they persist to.
//! It is constructed once at startup and passed to whatever needs it; there
//! is no global instance.
//!
//! # Write-through persistence
//!
//! Every mutating call serializes the affected collection in full and writes
//! it to the store before returning, then notifies subscribers. If the store
//! rejects the write, the in-memory change stands, a warning is logged, and
//! [`CartFacade::is_persistence_degraded`] reports `true` until a later write
//! of that same collection succeeds. Persistence is therefore best-effort;
//! callers never see an error for it.
//!
//! # Change notification
//!
//! Subscribers are plain callbacks with no payload. They run synchronously,
//! in subscription order, once per mutating call, after state and storage
//! have been updated.
//!
//! Callbacks run while the mutating call still holds `&mut CartFacade`. A
//! host that shares the facade through `Rc<RefCell<_>>` must not borrow it
//! from inside a callback; mark the view dirty there and re-read once the
//! mutating call has returned.

use std::fmt;

use dukaan_core::{Product, ProductId, SelectedOptions};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::cart::{CartEngine, CartLineItem};
use crate::config::CartConfig;
use crate::error::{CartError, Result};
use crate::pricing::OrderSummary;
use crate::store::{self, KeyValueStore};
use crate::wishlist::WishlistEngine;

/// Handle returned by [`CartFacade::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut()>;

/// Cart and wishlist state with write-through persistence and change
/// notification.
pub struct CartFacade<S: KeyValueStore> {
    store: S,
    config: CartConfig,
    cart: CartEngine,
    wishlist: WishlistEngine,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_subscription: u64,
    cart_write_failed: bool,
    wishlist_write_failed: bool,
}

impl<S: KeyValueStore + fmt::Debug> fmt::Debug for CartFacade<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartFacade")
            .field("store", &self.store)
            .field("config", &self.config)
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .field("subscribers", &self.subscribers.len())
            .field("cart_write_failed", &self.cart_write_failed)
            .field("wishlist_write_failed", &self.wishlist_write_failed)
            .finish()
    }
}

impl<S: KeyValueStore> CartFacade<S> {
    /// Rehydrate from `store` using the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, CartConfig::default())
    }

    /// Rehydrate from `store` using `config`.
    ///
    /// Missing, unreadable or malformed stored data yields an empty
    /// collection; construction never fails. A `config` that fails
    /// [`CartConfig::validate`] is replaced by the default configuration.
    pub fn with_config(store: S, config: CartConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!(error = %e, "Invalid cart config, using defaults");
                CartConfig::default()
            }
        };
        let cart = CartEngine::from_items(store::load_collection::<CartLineItem, _>(
            &store,
            &config.cart_key,
        ));
        let wishlist = WishlistEngine::from_entries(store::load_collection::<Product, _>(
            &store,
            &config.wishlist_key,
        ));

        info!(
            cart_lines = cart.len(),
            wishlist_entries = wishlist.len(),
            "Cart state rehydrated"
        );

        Self {
            store,
            config,
            cart,
            wishlist,
            subscribers: Vec::new(),
            next_subscription: 0,
            cart_write_failed: false,
            wishlist_write_failed: false,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    #[must_use]
    pub const fn cart(&self) -> &CartEngine {
        &self.cart
    }

    #[must_use]
    pub fn cart_items(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    #[must_use]
    pub fn cart_item_count(&self) -> u64 {
        self.cart.item_count()
    }

    #[must_use]
    pub const fn wishlist(&self) -> &WishlistEngine {
        &self.wishlist
    }

    #[must_use]
    pub fn wishlist_items(&self) -> &[Product] {
        self.wishlist.entries()
    }

    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    /// Subtotal, shipping, tax and total for the current cart.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::for_cart(&self.cart, &self.config.pricing)
    }

    #[must_use]
    pub const fn config(&self) -> &CartConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Direct access to the underlying store.
    ///
    /// Writes made here bypass the facade and are overwritten by the next
    /// mutation of the same collection.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give back the store, dropping in-memory state and subscribers.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Whether the stored copy of the cart or the wishlist is stale because
    /// its most recent write failed.
    #[must_use]
    pub const fn is_persistence_degraded(&self) -> bool {
        self.cart_write_failed || self.wishlist_write_failed
    }

    // =========================================================================
    // Cart mutations
    // =========================================================================

    /// Add one unit of `product` with `options`, merging with an existing
    /// line of the same identity.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product, options: SelectedOptions) {
        let quantity = self.cart.add_item(product, options);
        debug!(quantity, "Added to cart");
        self.cart_changed();
    }

    /// Remove the line identified by `product_id` and `options`, if any.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, product_id: &ProductId, options: &SelectedOptions) {
        let removed = self.cart.remove_item(product_id, options);
        debug!(removed, "Removed from cart");
        self.cart_changed();
    }

    /// Set the matching line's quantity; zero or less removes the line.
    #[instrument(skip(self))]
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        options: &SelectedOptions,
        new_quantity: i64,
    ) {
        let found = self.cart.update_quantity(product_id, options, new_quantity);
        debug!(found, "Updated cart quantity");
        self.cart_changed();
    }

    /// [`Self::update_quantity`] for raw UI input.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidQuantity` (and changes nothing) if `input`
    /// is not an integer; see [`parse_quantity`].
    pub fn update_quantity_from_input(
        &mut self,
        product_id: &ProductId,
        options: &SelectedOptions,
        input: &str,
    ) -> Result<()> {
        let quantity = parse_quantity(input)?;
        self.update_quantity(product_id, options, quantity);
        Ok(())
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.cart_changed();
    }

    /// Finish checkout: price the cart, then empty it.
    ///
    /// The wishlist is left untouched.
    #[instrument(skip(self))]
    pub fn complete_checkout(&mut self) -> OrderSummary {
        let summary = self.summary();
        info!(
            items = summary.item_count,
            total = %summary.total,
            "Checkout completed"
        );
        self.clear_cart();
        summary
    }

    // =========================================================================
    // Wishlist mutations
    // =========================================================================

    /// Wishlist `product` unless already wishlisted.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_wishlist(&mut self, product: &Product) {
        let inserted = self.wishlist.add_item(product);
        debug!(inserted, "Added to wishlist");
        self.wishlist_changed();
    }

    /// Remove `product_id` from the wishlist, if present.
    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) {
        let removed = self.wishlist.remove_item(product_id);
        debug!(removed, "Removed from wishlist");
        self.wishlist_changed();
    }

    /// Flip `product`'s wishlist membership. Returns whether it is
    /// wishlisted afterwards.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn toggle_wishlist(&mut self, product: &Product) -> bool {
        let wishlisted = self.wishlist.toggle(product);
        self.wishlist_changed();
        wishlisted
    }

    /// Add the wishlisted snapshot of `product_id` to the cart with no
    /// options. The entry stays on the wishlist.
    ///
    /// Returns `false`, changing nothing, if the product is not wishlisted.
    pub fn move_wishlist_item_to_cart(&mut self, product_id: &ProductId) -> bool {
        let Some(product) = self.wishlist.get(product_id).cloned() else {
            debug!(%product_id, "Not on wishlist, nothing to add");
            return false;
        };
        self.add_to_cart(&product, SelectedOptions::none());
        true
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register `callback` to run after every mutation.
    ///
    /// The callback must not touch the facade; see the module docs.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Stop notifying the subscriber behind `id`. Returns whether it was
    /// still registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn cart_changed(&mut self) {
        let result = store::save_collection(&mut self.store, &self.config.cart_key, self.cart.items());
        self.cart_write_failed =
            write_failed(&self.config.cart_key, result, self.cart_write_failed);
        self.notify();
    }

    fn wishlist_changed(&mut self) {
        let result = store::save_collection(
            &mut self.store,
            &self.config.wishlist_key,
            self.wishlist.entries(),
        );
        self.wishlist_write_failed =
            write_failed(&self.config.wishlist_key, result, self.wishlist_write_failed);
        self.notify();
    }

    fn notify(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback();
        }
    }
}

/// Log the outcome of a write to `key` and return whether it failed.
fn write_failed(key: &str, result: Result<()>, failed_before: bool) -> bool {
    match result {
        Ok(()) => {
            if failed_before {
                info!(key, "Persistence recovered");
            }
            false
        }
        Err(e) => {
            warn!(key, error = %e, "Persist failed, keeping in-memory state");
            true
        }
    }
}

/// Parse a quantity typed or picked in the UI.
///
/// Accepts base-10 integers and integral decimals (`"3"`, `" 3 "`, `"3.0"`).
/// Zero and negative values are accepted; they remove the line when applied.
/// Out-of-range integral values saturate to the `i64` range.
///
/// # Errors
///
/// Returns `CartError::InvalidQuantity` for empty, non-numeric, NaN,
/// infinite or fractional input.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_quantity(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if let Ok(quantity) = trimmed.parse::<i64>() {
        return Ok(quantity);
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| CartError::InvalidQuantity(input.to_owned()))?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(CartError::InvalidQuantity(input.to_owned()));
    }

    // `as` saturates at the i64 bounds.
    Ok(value as i64)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::store::MemoryStore;

    fn product(id: i64, price: i64) -> Product {
        Product::new(id, format!("Product {id}"), Decimal::from(price), "/p.jpg")
    }

    fn size(value: &str) -> SelectedOptions {
        SelectedOptions::from_pairs([("size", value)])
    }

    fn counter(facade: &mut CartFacade<MemoryStore>) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        facade.subscribe(move || seen.set(seen.get() + 1));
        count
    }

    #[test]
    fn test_fresh_store_starts_empty() {
        let facade = CartFacade::new(MemoryStore::new());
        assert!(facade.cart_items().is_empty());
        assert!(facade.wishlist_items().is_empty());
        assert!(!facade.is_persistence_degraded());
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let mut facade = CartFacade::new(MemoryStore::new());
        facade.add_to_cart(&product(1, 100), size("M"));

        let stored = facade.store().read("cart").unwrap().unwrap();
        let lines: Vec<CartLineItem> = serde_json::from_str(&stored).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].selected_options, size("M"));

        facade.update_quantity(&1.into(), &size("M"), 4);
        let stored = facade.store().read("cart").unwrap().unwrap();
        let lines: Vec<CartLineItem> = serde_json::from_str(&stored).unwrap();
        assert_eq!(lines[0].quantity, 4);

        facade.add_to_wishlist(&product(2, 50));
        let stored = facade.store().read("wishlist").unwrap().unwrap();
        let entries: Vec<Product> = serde_json::from_str(&stored).unwrap();
        assert_eq!(entries[0].id, ProductId::from(2));
    }

    #[test]
    fn test_rehydrates_from_store() {
        let mut facade = CartFacade::new(MemoryStore::new());
        facade.add_to_cart(&product(1, 100), size("M"));
        facade.add_to_cart(&product(1, 100), size("M"));
        facade.add_to_wishlist(&product(9, 10));

        let reloaded = CartFacade::new(facade.into_store());
        assert_eq!(reloaded.cart_items().len(), 1);
        assert_eq!(reloaded.cart_items()[0].quantity, 2);
        assert!(reloaded.is_in_wishlist(&9.into()));
    }

    #[test]
    fn test_corrupt_cart_recovers_empty() {
        let mut store = MemoryStore::new();
        store.write("cart", "[{oops").unwrap();
        store.write("wishlist", r#"[{"id":3,"name":"Dupatta","price":799,"image":""}]"#).unwrap();

        let facade = CartFacade::new(store);
        assert!(facade.cart_items().is_empty());
        assert_eq!(facade.wishlist_items().len(), 1);
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut facade = CartFacade::new(MemoryStore::with_quota(16));
        facade.add_to_cart(&product(1, 100), SelectedOptions::none());

        assert_eq!(facade.cart_item_count(), 1);
        assert!(facade.is_persistence_degraded());
        assert_eq!(facade.store().read("cart").unwrap(), None);
    }

    #[test]
    fn test_degraded_flag_clears_on_success() {
        let mut facade = CartFacade::new(MemoryStore::new());
        facade.add_to_cart(&product(1, 100), SelectedOptions::none());
        assert!(!facade.is_persistence_degraded());

        facade.store_mut().set_disabled(true);
        facade.add_to_cart(&product(2, 100), SelectedOptions::none());
        assert!(facade.is_persistence_degraded());

        facade.store_mut().set_disabled(false);
        assert!(facade.is_persistence_degraded());
        facade.add_to_cart(&product(3, 100), SelectedOptions::none());
        assert!(!facade.is_persistence_degraded());

        let stored = facade.store().read("cart").unwrap().unwrap();
        let lines: Vec<CartLineItem> = serde_json::from_str(&stored).unwrap();
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_wishlist_success_does_not_hide_stale_cart() {
        let mut facade = CartFacade::new(MemoryStore::new());
        facade.add_to_cart(&product(1, 100), SelectedOptions::none());

        facade.store_mut().set_disabled(true);
        facade.add_to_cart(&product(2, 100), SelectedOptions::none());
        facade.store_mut().set_disabled(false);

        facade.add_to_wishlist(&product(9, 10));
        assert!(facade.is_persistence_degraded());

        let reloaded = CartFacade::new(facade.into_store());
        assert_eq!(reloaded.cart_items().len(), 1);
        assert!(reloaded.is_in_wishlist(&9.into()));
    }

    #[test]
    fn test_cart_success_does_not_hide_stale_wishlist() {
        let mut facade = CartFacade::new(MemoryStore::new());
        facade.store_mut().set_disabled(true);
        facade.add_to_wishlist(&product(9, 10));
        facade.store_mut().set_disabled(false);

        facade.add_to_cart(&product(1, 100), SelectedOptions::none());
        assert!(facade.is_persistence_degraded());

        facade.remove_from_wishlist(&8.into());
        assert!(!facade.is_persistence_degraded());
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = CartConfig {
            cart_key: "shared".to_string(),
            wishlist_key: "shared".to_string(),
            ..CartConfig::default()
        };
        let mut facade = CartFacade::with_config(MemoryStore::new(), config);
        assert_eq!(facade.config(), &CartConfig::default());

        facade.add_to_cart(&product(1, 100), SelectedOptions::none());
        facade.add_to_wishlist(&product(2, 10));

        let reloaded = CartFacade::new(facade.into_store());
        assert_eq!(reloaded.cart_items().len(), 1);
        assert!(reloaded.is_in_wishlist(&2.into()));
    }

    #[test]
    fn test_host_rereads_after_notification() {
        let facade = Rc::new(std::cell::RefCell::new(CartFacade::new(MemoryStore::new())));
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        facade.borrow_mut().subscribe(move || flag.set(true));

        facade.borrow_mut().add_to_cart(&product(1, 100), SelectedOptions::none());
        assert!(dirty.replace(false));
        assert_eq!(facade.borrow().cart_item_count(), 1);
    }

    #[test]
    fn test_summary_of_huge_stored_cart_does_not_panic() {
        let mut store = MemoryStore::new();
        store
            .write(
                "cart",
                r#"[{"id":1,"name":"Gold","price":"70000000000000000000000000000","image":"","quantity":10,"selectedOptions":{}}]"#,
            )
            .unwrap();

        let mut facade = CartFacade::new(store);
        assert_eq!(facade.cart_total(), Decimal::MAX);
        assert_eq!(facade.summary().total, Decimal::MAX);

        facade.add_to_cart(&product(2, 100), SelectedOptions::none());
        assert_eq!(facade.complete_checkout().total, Decimal::MAX);
        assert!(facade.cart_items().is_empty());
    }

    #[test]
    fn test_subscribers_notified_once_per_mutation() {
        let mut facade = CartFacade::new(MemoryStore::new());
        let count = counter(&mut facade);

        facade.add_to_cart(&product(1, 100), SelectedOptions::none());
        facade.update_quantity(&1.into(), &SelectedOptions::none(), 3);
        facade.remove_from_cart(&1.into(), &SelectedOptions::none());
        facade.add_to_wishlist(&product(1, 100));
        facade.remove_from_wishlist(&1.into());
        facade.clear_cart();

        assert_eq!(count.get(), 6);
    }

    #[test]
    fn test_notification_runs_in_subscription_order() {
        let mut facade = CartFacade::new(MemoryStore::new());
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        for name in ["header", "cart-page"] {
            let log = Rc::clone(&log);
            facade.subscribe(move || log.borrow_mut().push(name));
        }

        facade.add_to_cart(&product(1, 100), SelectedOptions::none());
        assert_eq!(*log.borrow(), vec!["header", "cart-page"]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut facade = CartFacade::new(MemoryStore::new());
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let id = facade.subscribe(move || seen.set(seen.get() + 1));

        facade.add_to_cart(&product(1, 100), SelectedOptions::none());
        assert!(facade.unsubscribe(id));
        assert!(!facade.unsubscribe(id));
        facade.add_to_cart(&product(1, 100), SelectedOptions::none());

        assert_eq!(count.get(), 1);
        assert_eq!(facade.subscriber_count(), 0);
    }

    #[test]
    fn test_toggle_wishlist() {
        let mut facade = CartFacade::new(MemoryStore::new());
        assert!(facade.toggle_wishlist(&product(5, 10)));
        assert!(facade.is_in_wishlist(&5.into()));
        assert!(!facade.toggle_wishlist(&product(5, 10)));
        assert!(!facade.is_in_wishlist(&5.into()));
    }

    #[test]
    fn test_move_wishlist_item_to_cart() {
        let mut facade = CartFacade::new(MemoryStore::new());
        let count = counter(&mut facade);
        facade.add_to_wishlist(&product(5, 10));

        assert!(facade.move_wishlist_item_to_cart(&5.into()));
        assert!(facade.is_in_wishlist(&5.into()));
        assert_eq!(facade.cart_items()[0].product_id(), &ProductId::from(5));
        assert!(facade.cart_items()[0].selected_options.is_empty());

        assert!(!facade.move_wishlist_item_to_cart(&6.into()));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_complete_checkout_clears_cart_only() {
        let mut facade = CartFacade::new(MemoryStore::new());
        facade.add_to_cart(&product(1, 1000), SelectedOptions::none());
        facade.add_to_wishlist(&product(2, 10));

        let summary = facade.complete_checkout();
        assert_eq!(summary.subtotal, Decimal::from(1000));
        assert_eq!(summary.total, Decimal::from(1679));
        assert!(facade.cart_items().is_empty());
        assert_eq!(facade.wishlist_items().len(), 1);
        assert_eq!(facade.store().read("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_custom_keys() {
        let config = CartConfig {
            cart_key: "bag".to_string(),
            wishlist_key: "saved".to_string(),
            ..CartConfig::default()
        };
        let mut facade = CartFacade::with_config(MemoryStore::new(), config);
        facade.add_to_cart(&product(1, 1), SelectedOptions::none());
        facade.add_to_wishlist(&product(1, 1));

        assert!(facade.store().read("bag").unwrap().is_some());
        assert!(facade.store().read("saved").unwrap().is_some());
        assert_eq!(facade.store().read("cart").unwrap(), None);
    }

    #[test]
    fn test_update_quantity_from_input() {
        let mut facade = CartFacade::new(MemoryStore::new());
        facade.add_to_cart(&product(1, 100), SelectedOptions::none());
        let count = counter(&mut facade);

        facade
            .update_quantity_from_input(&1.into(), &SelectedOptions::none(), " 3 ")
            .unwrap();
        assert_eq!(facade.cart_item_count(), 3);

        let err = facade
            .update_quantity_from_input(&1.into(), &SelectedOptions::none(), "2.5")
            .unwrap_err();
        assert!(matches!(err, CartError::InvalidQuantity(_)));
        assert_eq!(facade.cart_item_count(), 3);
        assert_eq!(count.get(), 1);

        facade
            .update_quantity_from_input(&1.into(), &SelectedOptions::none(), "0")
            .unwrap();
        assert!(facade.cart_items().is_empty());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("4").unwrap(), 4);
        assert_eq!(parse_quantity(" -2 ").unwrap(), -2);
        assert_eq!(parse_quantity("3.0").unwrap(), 3);
        assert_eq!(parse_quantity("1e3").unwrap(), 1000);
        assert_eq!(parse_quantity("1e30").unwrap(), i64::MAX);

        for bad in ["", "  ", "abc", "2.5", "NaN", "inf", "-infinity", "3 apples"] {
            assert!(
                matches!(parse_quantity(bad), Err(CartError::InvalidQuantity(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}

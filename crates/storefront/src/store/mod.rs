//! Persistent key/value storage.
//!
//! The storefront persists two JSON blobs (the cart and the wishlist) into a
//! string-keyed store with synchronous semantics, modelled on the browser's
//! `localStorage`. The store knows nothing about carts; it only moves strings.
//!
//! # Implementations
//!
//! - [`MemoryStore`] - in-process map with an optional byte quota
//! - [`FileStore`] - one file per key, written atomically

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{CartError, Result};

/// Errors raised by a [`KeyValueStore`].
///
/// Every variant means the same thing to the cart: storage is unavailable
/// right now and in-memory state is the only copy.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The write would exceed the store's quota.
    #[error("quota exceeded writing {key:?}: {required} bytes needed, quota is {quota}")]
    QuotaExceeded {
        key: String,
        required: usize,
        quota: usize,
    },

    /// Storage is disabled or the key cannot be stored.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable string-keyed storage with synchronous reads and writes.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key was never written or has been removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    fn read(&self, key: &str) -> std::result::Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`.
    ///
    /// The value is durable once this returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the write.
    fn write(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the removal.
    fn remove(&mut self, key: &str) -> std::result::Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> std::result::Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Read and parse the JSON array stored under `key`.
///
/// A missing or blank value is an empty collection.
///
/// # Errors
///
/// Returns `StorageUnavailable` if the store cannot be read and
/// `MalformedPersistedData` if the stored value is not a valid array of `T`.
pub fn try_load_collection<T, S>(store: &S, key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.read(key)? else {
        return Ok(Vec::new());
    };
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&raw).map_err(|source| CartError::MalformedPersistedData {
        key: key.to_owned(),
        source,
    })
}

/// Like [`try_load_collection`], but any failure yields an empty collection.
///
/// Rehydration must never fail startup; the failure is logged instead.
pub fn load_collection<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match try_load_collection(store, key) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "Discarding stored collection, starting empty");
            Vec::new()
        }
    }
}

/// Serialize `items` as a JSON array and write it under `key`.
///
/// # Errors
///
/// Returns `Serialization` if an item cannot be encoded and
/// `StorageUnavailable` if the store rejects the write.
pub fn save_collection<T, S>(store: &mut S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(items).map_err(CartError::Serialization)?;
    store.write(key, &json)?;
    debug!(key, items = items.len(), bytes = json.len(), "Persisted collection");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = MemoryStore::new();
        let items: Vec<u32> = try_load_collection(&store, "cart").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_blank_value_is_empty() {
        let mut store = MemoryStore::new();
        store.write("cart", "  ").unwrap();
        let items: Vec<u32> = try_load_collection(&store, "cart").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_malformed_reports_key() {
        let mut store = MemoryStore::new();
        store.write("cart", "{not json").unwrap();
        let err = try_load_collection::<u32, _>(&store, "cart").unwrap_err();
        assert!(matches!(
            err,
            CartError::MalformedPersistedData { ref key, .. } if key == "cart"
        ));
    }

    #[test]
    fn test_load_wrong_shape_falls_back() {
        let mut store = MemoryStore::new();
        store.write("cart", r#"{"id":1}"#).unwrap();
        let items: Vec<u32> = load_collection(&store, "cart");
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_disabled_store_falls_back() {
        let store = MemoryStore::disabled();
        let items: Vec<u32> = load_collection(&store, "cart");
        assert!(items.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        save_collection(&mut store, "nums", &[3_u32, 1, 2]).unwrap();
        assert_eq!(store.read("nums").unwrap().as_deref(), Some("[3,1,2]"));

        let items: Vec<u32> = load_collection(&store, "nums");
        assert_eq!(items, vec![3, 1, 2]);
    }

    #[test]
    fn test_save_surfaces_store_error() {
        let mut store = MemoryStore::disabled();
        let err = save_collection(&mut store, "nums", &[1_u32]).unwrap_err();
        assert!(matches!(err, CartError::StorageUnavailable(_)));
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.read("k").unwrap(), None);
    }
}

//! In-process key/value store.

use std::collections::HashMap;

use super::{KeyValueStore, StoreError};

/// An in-memory [`KeyValueStore`].
///
/// Optionally enforces a byte quota over all stored keys and values, the way
/// browsers cap `localStorage`, and can be switched off entirely to mimic
/// storage disabled by privacy settings.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryStore {
    /// An empty store with no quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store that rejects writes pushing usage past `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// A store that rejects every read and write.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Turn the store off or back on. Stored entries are kept.
    pub const fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Bytes currently used by keys and values.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_enabled(&self) -> Result<(), StoreError> {
        if self.disabled {
            return Err(StoreError::Unavailable("storage is disabled".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_enabled()?;
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_enabled()?;

        if let Some(quota) = self.quota {
            let current = self.entries.get(key).map_or(0, |old| key.len() + old.len());
            let required = self.used_bytes() - current + key.len() + value.len();
            if required > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_owned(),
                    required,
                    quota,
                });
            }
        }

        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.check_enabled()?;
        self.entries.remove(key);
        Ok(())
    }
}

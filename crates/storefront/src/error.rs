//! Unified error handling for the cart and wishlist state manager.
//!
//! Most of these errors never reach callers: storage failures and malformed
//! stored data are recovered inside [`crate::CartFacade`] and only logged.
//! The variants exist so the recovery paths can be logged and tested
//! precisely.

use thiserror::Error;

use crate::store::StoreError;

/// Error type for cart and wishlist operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Persistent storage rejected a read or write.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    /// A stored collection could not be parsed.
    #[error("malformed data under key {key:?}: {source}")]
    MalformedPersistedData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A quantity from user input was not a usable integer.
    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),

    /// An in-memory collection could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

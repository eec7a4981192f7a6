//! Persistent key-value storage for storefront state.
//!
//! Collections and preferences live in string-keyed slots: one slot per
//! collection, one slot per favorite flag, plus the presentation
//! preferences. Values are opaque strings to the backend; the stores
//! decide the encoding (JSON except where noted in [`keys`]).
//!
//! [`Storage`] is the seam between the stores and the outside world.
//! [`MemoryStorage`] backs tests and ephemeral sessions; [`JsonFileStorage`]
//! keeps one file per slot. A missing slot reads as `None`, and
//! interpreting slot contents is the caller's job, so a corrupt value is
//! never an adapter error.

mod json_file;
mod memory;

use std::sync::Arc;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Storage backend error.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing directory could not be created.
    #[error("failed to create storage directory {path}: {source}")]
    CreateDir {
        /// Directory that was attempted.
        path: std::path::PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
    /// A slot could not be read or written.
    #[error("storage I/O error on slot {key}: {source}")]
    Io {
        /// Slot key involved.
        key: String,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
    /// Slot key not usable by this backend.
    #[error("invalid slot key: {0:?}")]
    InvalidKey(String),
}

/// String-keyed slot storage.
///
/// One logical slot per key; `set` replaces the whole value. Mutations are
/// synchronous: when `set` returns, the slot holds the new value.
pub trait Storage {
    /// Read the value stored at `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read at all; an absent
    /// slot is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: Storage + ?Sized> Storage for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

// =============================================================================
// Slot Keys
// =============================================================================

/// Slot keys used by the storefront.
///
/// Fixed names: renaming one orphans state persisted under the old name.
pub mod keys {
    use souq_core::ProductId;

    /// Cart contents (JSON array of product snapshots).
    pub const CART: &str = "cartItems";

    /// Comparison tray contents (JSON array of product snapshots).
    pub const COMPARE: &str = "comparedProducts";

    /// UI language choice (bare language code, `ar` / `en`).
    pub const LANGUAGE: &str = "lang";

    /// Dark-mode choice (`true` / `false`).
    pub const DARK_MODE: &str = "dark";

    /// Signed-in user snapshot; presence is what the account guard checks.
    pub const CURRENT_USER: &str = "currentUser";

    /// Favorite flag slot for one product (JSON boolean).
    #[must_use]
    pub fn favorite(id: ProductId) -> String {
        format!("like-{id}")
    }
}

//! Per-product favorite flags.

use souq_core::ProductId;

use crate::storage::{Storage, keys};

/// Per-product "liked" flags, one persistent slot per product.
///
/// The slot is the state: reads go straight to storage, so two handles on
/// the same backend observe each other's toggles. An absent or unreadable
/// flag reads as not-favorite.
#[derive(Debug)]
pub struct FavoriteStore<S> {
    storage: S,
}

impl<S: Storage> FavoriteStore<S> {
    /// Create a favorites store backed by `storage`.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Whether `id` is currently marked as a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        let key = keys::favorite(id);
        match self.storage.get(&key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(%key, "unparseable favorite flag, treating as false: {e}");
                false
            }),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(%key, "failed to read favorite flag, treating as false: {e}");
                false
            }
        }
    }

    /// Flip the flag for `id`, persist it, and return the new value.
    ///
    /// A write failure is logged; the returned value is still the flipped
    /// flag.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        let next = !self.is_favorite(id);
        let key = keys::favorite(id);
        if let Err(e) = self.storage.set(&key, if next { "true" } else { "false" }) {
            tracing::error!(%key, "failed to persist favorite flag: {e}");
        }
        tracing::debug!(%key, liked = next, "favorite toggled");
        next
    }
}

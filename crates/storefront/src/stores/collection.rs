//! Ordered product collections (cart and comparison tray).

use rust_decimal::Decimal;
use souq_core::{Language, Product, ProductId, total_price};

use crate::storage::{Storage, keys};

/// Maximum number of products the comparison tray accepts.
pub const COMPARE_LIMIT: usize = 3;

/// What [`CollectionStore::add`] did with the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was appended to the end of the collection.
    Added,
    /// The collection already held the product; nothing changed.
    AlreadyPresent,
}

/// Rejection returned when a capacity-limited collection is already full.
///
/// The collection is left untouched. Presenting the rejection is the
/// caller's decision; [`message`](Self::message) supplies shopper-facing
/// text in either language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("collection is full ({limit} products max)")]
pub struct CollectionFullError {
    /// Maximum number of products the collection accepts.
    pub limit: usize,
}

impl CollectionFullError {
    /// Shopper-facing rejection text in `language`.
    #[must_use]
    pub fn message(&self, language: Language) -> String {
        match language {
            Language::Ar => format!("لا يمكنك مقارنة أكثر من {} منتجات", self.limit),
            Language::En => format!("You cannot compare more than {} products", self.limit),
        }
    }
}

/// An ordered, persistent product collection with unique entries.
///
/// Entries are full product snapshots keyed by [`ProductId`], kept in
/// insertion order. Every mutation is mirrored into the collection's slot
/// before the call returns, so a fresh store on the same backend sees the
/// same sequence.
#[derive(Debug)]
pub struct CollectionStore<S> {
    storage: S,
    slot: &'static str,
    capacity: Option<usize>,
    items: Vec<Product>,
}

impl<S: Storage> CollectionStore<S> {
    /// Open the shopping cart backed by `storage`.
    #[must_use]
    pub fn cart(storage: S) -> Self {
        Self::open(storage, keys::CART, None)
    }

    /// Open the comparison tray backed by `storage`.
    #[must_use]
    pub fn compare(storage: S) -> Self {
        Self::open(storage, keys::COMPARE, Some(COMPARE_LIMIT))
    }

    fn open(storage: S, slot: &'static str, capacity: Option<usize>) -> Self {
        let items = sanitize(load_slot(&storage, slot), slot, capacity);
        Self {
            storage,
            slot,
            capacity,
            items,
        }
    }

    /// Add `product` to the end of the collection and persist the result.
    ///
    /// Adding a product that is already present changes nothing and reports
    /// [`AddOutcome::AlreadyPresent`].
    ///
    /// # Errors
    ///
    /// Returns [`CollectionFullError`] when the collection is capacity
    /// limited, already full, and `product` is not already present. The
    /// collection is left unchanged.
    pub fn add(&mut self, product: Product) -> Result<AddOutcome, CollectionFullError> {
        let id = product.id;
        match apply_add(&self.items, product, self.capacity)? {
            Some(next) => {
                self.items = next;
                self.persist();
                tracing::debug!(slot = self.slot, %id, "product added");
                Ok(AddOutcome::Added)
            }
            None => Ok(AddOutcome::AlreadyPresent),
        }
    }

    /// Remove the product with `id`, keeping the order of the rest.
    ///
    /// Returns `true` when an entry was removed. Removing an absent id
    /// changes nothing, and nothing is persisted.
    pub fn remove(&mut self, id: ProductId) -> bool {
        match apply_remove(&self.items, id) {
            Some(next) => {
                self.items = next;
                self.persist();
                tracing::debug!(slot = self.slot, %id, "product removed");
                true
            }
            None => false,
        }
    }

    /// The collection in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of products held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a product with `id` is held.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Sum of effective unit prices over the collection.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        total_price(&self.items)
    }

    /// Mirror the current sequence into the collection's slot.
    ///
    /// A write failure is logged and swallowed; the in-memory sequence
    /// stays authoritative and the next successful write carries it whole.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(slot = self.slot, "failed to encode collection: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(self.slot, &json) {
            tracing::error!(slot = self.slot, "failed to persist collection: {e}");
        }
    }
}

// =============================================================================
// Pure transitions
// =============================================================================

/// Compute the sequence after an add, without side effects.
///
/// `Ok(Some(next))` is the appended sequence; `Ok(None)` means the product
/// was already present and the old sequence stands.
fn apply_add(
    items: &[Product],
    product: Product,
    capacity: Option<usize>,
) -> Result<Option<Vec<Product>>, CollectionFullError> {
    if items.iter().any(|p| p.id == product.id) {
        return Ok(None);
    }
    if let Some(limit) = capacity {
        if items.len() >= limit {
            return Err(CollectionFullError { limit });
        }
    }
    let mut next = items.to_vec();
    next.push(product);
    Ok(Some(next))
}

/// Compute the sequence after a remove, without side effects.
///
/// `None` means no entry matched and the old sequence stands.
fn apply_remove(items: &[Product], id: ProductId) -> Option<Vec<Product>> {
    if !items.iter().any(|p| p.id == id) {
        return None;
    }
    Some(items.iter().filter(|p| p.id != id).cloned().collect())
}

// =============================================================================
// Slot loading
// =============================================================================

/// Read and decode a collection slot, degrading to empty on any failure.
fn load_slot<S: Storage>(storage: &S, slot: &str) -> Vec<Product> {
    let raw = match storage.get(slot) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(slot, "failed to read collection slot, starting empty: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(slot, "discarding unparseable collection slot: {e}");
            Vec::new()
        }
    }
}

/// Re-establish the collection invariants over decoded slot data.
///
/// Duplicate ids keep their first occurrence; a capacity-limited
/// collection is cut down to its limit.
fn sanitize(mut items: Vec<Product>, slot: &str, capacity: Option<usize>) -> Vec<Product> {
    let before = items.len();
    let mut seen: Vec<ProductId> = Vec::with_capacity(items.len());
    items.retain(|p| {
        if seen.contains(&p.id) {
            false
        } else {
            seen.push(p.id);
            true
        }
    });
    if items.len() < before {
        tracing::warn!(
            slot,
            dropped = before - items.len(),
            "dropped duplicate entries from collection slot"
        );
    }
    if let Some(limit) = capacity {
        if items.len() > limit {
            tracing::warn!(slot, limit, "truncating over-capacity collection slot");
            items.truncate(limit);
        }
    }
    items
}

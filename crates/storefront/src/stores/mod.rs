//! Shopper collections: cart, comparison tray, and favorites.
//!
//! Each store mirrors every mutation into its storage slot synchronously.
//! Loading substitutes the empty default when a slot is missing or
//! unreadable, and a full comparison tray rejects further adds with a
//! typed error the caller can present in either language.

mod collection;
mod favorites;

pub use collection::{AddOutcome, COMPARE_LIMIT, CollectionFullError, CollectionStore};
pub use favorites::FavoriteStore;

//! Storefront state assembled at startup.

use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::prefs::Preferences;
use crate::storage::{JsonFileStorage, Storage, StorageError};
use crate::stores::{CollectionStore, FavoriteStore};

/// Error assembling the storefront state.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontInitError {
    /// The catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// The storage backend could not be opened.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// The storefront's client state: catalog, collections, and preferences.
///
/// One instance is constructed at startup and handed to the rendering
/// layer; everything hangs off it and nothing is process-global. The
/// stores and the preferences share one storage backend, so their slots
/// land in one place.
#[derive(Debug)]
pub struct Storefront<S> {
    catalog: Catalog,
    prefs: Preferences<S>,
    cart: CollectionStore<S>,
    compare: CollectionStore<S>,
    favorites: FavoriteStore<S>,
}

impl Storefront<JsonFileStorage> {
    /// Open the file-backed storefront described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be loaded or the storage
    /// directory cannot be created.
    pub fn open(config: &StorefrontConfig) -> Result<Self, StorefrontInitError> {
        let catalog = Catalog::load(&config.catalog_path)?;
        let storage = JsonFileStorage::open(&config.data_dir)?;
        Ok(Self::with_storage(catalog, storage))
    }
}

impl<S: Storage + Clone> Storefront<S> {
    /// Assemble the storefront over an injected storage backend.
    ///
    /// Each store gets a handle on `storage`; cloning is expected to share
    /// the underlying backend, as [`MemoryStorage`] and [`JsonFileStorage`]
    /// both do.
    ///
    /// [`MemoryStorage`]: crate::storage::MemoryStorage
    #[must_use]
    pub fn with_storage(catalog: Catalog, storage: S) -> Self {
        Self {
            prefs: Preferences::new(storage.clone()),
            cart: CollectionStore::cart(storage.clone()),
            compare: CollectionStore::compare(storage.clone()),
            favorites: FavoriteStore::new(storage),
            catalog,
        }
    }
}

impl<S: Storage> Storefront<S> {
    /// The static product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The shopping cart.
    #[must_use]
    pub fn cart(&self) -> &CollectionStore<S> {
        &self.cart
    }

    /// The shopping cart, for mutation.
    pub fn cart_mut(&mut self) -> &mut CollectionStore<S> {
        &mut self.cart
    }

    /// The comparison tray.
    #[must_use]
    pub fn compare(&self) -> &CollectionStore<S> {
        &self.compare
    }

    /// The comparison tray, for mutation.
    pub fn compare_mut(&mut self) -> &mut CollectionStore<S> {
        &mut self.compare
    }

    /// The per-product favorite flags.
    #[must_use]
    pub fn favorites(&self) -> &FavoriteStore<S> {
        &self.favorites
    }

    /// The favorite flags, for toggling.
    pub fn favorites_mut(&mut self) -> &mut FavoriteStore<S> {
        &mut self.favorites
    }

    /// The presentation preferences.
    #[must_use]
    pub fn prefs(&self) -> &Preferences<S> {
        &self.prefs
    }

    /// The presentation preferences, for mutation.
    pub fn prefs_mut(&mut self) -> &mut Preferences<S> {
        &mut self.prefs
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use souq_core::{Language, Product, ProductId};

    use super::*;
    use crate::storage::MemoryStorage;

    const CATALOG_JSON: &str = r#"[
        {
            "id": 1,
            "name": { "ar": "عود معتق", "en": "Aged Oud" },
            "image": "/images/aged-oud.jpg",
            "type": "simple",
            "price": "45.5"
        },
        {
            "id": 2,
            "name": { "ar": "مسك أبيض", "en": "White Musk" },
            "image": "/images/white-musk.jpg",
            "type": "simple",
            "price": "12.75"
        }
    ]"#;

    fn storefront() -> Storefront<MemoryStorage> {
        Storefront::with_storage(
            Catalog::from_json(CATALOG_JSON).unwrap(),
            MemoryStorage::new(),
        )
    }

    fn pick<S: Storage>(storefront: &Storefront<S>, id: i64) -> Product {
        storefront.catalog().get(ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_fresh_storefront_has_empty_state() {
        let storefront = storefront();
        assert!(storefront.cart().is_empty());
        assert!(storefront.compare().is_empty());
        assert_eq!(storefront.prefs().language(), Language::Ar);
        assert!(!storefront.prefs().is_signed_in());
    }

    #[test]
    fn test_stores_share_the_injected_backend() {
        let storage = MemoryStorage::new();
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let mut storefront = Storefront::with_storage(catalog.clone(), storage.clone());

        let product = pick(&storefront, 1);
        storefront.cart_mut().add(product).unwrap();
        storefront.favorites_mut().toggle(ProductId::new(2));
        storefront.prefs_mut().set_language(Language::En);

        let reloaded = Storefront::with_storage(catalog, storage);
        assert!(reloaded.cart().contains(ProductId::new(1)));
        assert!(reloaded.favorites().is_favorite(ProductId::new(2)));
        assert_eq!(reloaded.prefs().language(), Language::En);
    }

    #[test]
    fn test_collections_do_not_bleed_into_each_other() {
        let mut storefront = storefront();
        let product = pick(&storefront, 1);
        storefront.compare_mut().add(product).unwrap();

        assert!(storefront.compare().contains(ProductId::new(1)));
        assert!(!storefront.cart().contains(ProductId::new(1)));
        assert!(!storefront.favorites().is_favorite(ProductId::new(1)));
    }

    #[test]
    fn test_cart_snapshot_outlives_the_catalog_entry() {
        // A snapshot in the cart stays intact even when a later catalog no
        // longer carries the record it came from.
        let storage = MemoryStorage::new();
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let mut storefront = Storefront::with_storage(catalog, storage.clone());
        let product = pick(&storefront, 2);
        storefront.cart_mut().add(product).unwrap();

        let trimmed = Catalog::from_json("[]").unwrap();
        let reloaded = Storefront::with_storage(trimmed, storage);
        assert_eq!(
            reloaded.cart().items().first().map(|p| p.name.en.as_str()),
            Some("White Musk")
        );
    }

    #[test]
    fn test_open_round_trips_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("products.json");
        std::fs::write(&catalog_path, CATALOG_JSON).unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().join("storage"),
            catalog_path,
        };

        {
            let mut storefront = Storefront::open(&config).unwrap();
            let product = pick(&storefront, 1);
            storefront.cart_mut().add(product).unwrap();
            storefront.prefs_mut().set_dark_mode(true);
        }

        let reloaded = Storefront::open(&config).unwrap();
        assert!(reloaded.cart().contains(ProductId::new(1)));
        assert!(reloaded.prefs().dark_mode());
    }

    #[test]
    fn test_open_fails_without_a_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().join("storage"),
            catalog_path: dir.path().join("missing.json"),
        };
        assert!(matches!(
            Storefront::open(&config),
            Err(StorefrontInitError::Catalog(_))
        ));
    }
}

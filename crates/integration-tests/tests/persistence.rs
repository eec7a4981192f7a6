//! Slot wire format and file-backed round-trips.
//!
//! These tests pin down what actually lands in storage: collection slots
//! hold JSON arrays of full product snapshots, preference slots hold bare
//! codes, favorite slots hold JSON booleans. They also load the sample
//! catalog shipped in `data/products.json`.
//!
//! Run with: cargo test -p souq-integration-tests

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde_json::Value;
use souq_core::{Language, ProductId};
use souq_integration_tests::fixtures;
use souq_storefront::catalog::Catalog;
use souq_storefront::config::StorefrontConfig;
use souq_storefront::state::Storefront;
use souq_storefront::storage::{JsonFileStorage, Storage};
use souq_storefront::stores::{CollectionStore, FavoriteStore};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Test helper: write a two-product catalog file and return its config.
fn file_config(dir: &tempfile::TempDir) -> StorefrontConfig {
    let products = vec![
        fixtures::discounted(1, dec("45.5"), dec("60")),
        fixtures::variable(2, &[dec("18"), dec("30")]),
    ];
    let catalog_path = dir.path().join("products.json");
    std::fs::write(&catalog_path, serde_json::to_string(&products).unwrap()).unwrap();
    StorefrontConfig {
        data_dir: dir.path().join("storage"),
        catalog_path,
    }
}

// ============================================================================
// File-backed round-trips
// ============================================================================

#[test]
fn test_state_survives_closing_and_reopening_the_storefront() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    {
        let mut storefront = Storefront::open(&config).unwrap();
        let first = storefront.catalog().get(ProductId::new(1)).unwrap().clone();
        let second = storefront.catalog().get(ProductId::new(2)).unwrap().clone();
        storefront.cart_mut().add(first).unwrap();
        storefront.compare_mut().add(second).unwrap();
        storefront.favorites_mut().toggle(ProductId::new(2));
        storefront.prefs_mut().set_language(Language::En);
        storefront.prefs_mut().set_dark_mode(true);
    }

    let reloaded = Storefront::open(&config).unwrap();
    assert!(reloaded.cart().contains(ProductId::new(1)));
    assert!(reloaded.compare().contains(ProductId::new(2)));
    assert!(reloaded.favorites().is_favorite(ProductId::new(2)));
    assert_eq!(reloaded.prefs().language(), Language::En);
    assert!(reloaded.prefs().dark_mode());
    assert_eq!(reloaded.cart().total_price(), dec("45.5"));
}

#[test]
fn test_corrupt_cart_slot_degrades_to_an_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    std::fs::create_dir_all(&config.data_dir).unwrap();
    std::fs::write(config.data_dir.join("cartItems"), "{definitely not json").unwrap();

    let storefront = Storefront::open(&config).unwrap();
    assert!(storefront.cart().is_empty());
}

#[test]
fn test_overfull_compare_slot_is_cut_back_to_capacity() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    let five: Vec<_> = (1..=5).map(|id| fixtures::simple(id, dec("1"))).collect();
    std::fs::create_dir_all(&config.data_dir).unwrap();
    std::fs::write(
        config.data_dir.join("comparedProducts"),
        serde_json::to_string(&five).unwrap(),
    )
    .unwrap();

    let storefront = Storefront::open(&config).unwrap();
    assert_eq!(storefront.compare().len(), 3);
}

// ============================================================================
// Wire format
// ============================================================================

#[test]
fn test_cart_slot_holds_a_json_array_of_full_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::open(dir.path()).unwrap();
    let mut cart = CollectionStore::cart(storage);
    cart.add(fixtures::discounted(1, dec("45.5"), dec("60")))
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join("cartItems")).unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let entry = entries.first().unwrap();
    assert_eq!(entry["id"], 1);
    assert_eq!(entry["type"], "simple");
    assert_eq!(entry["price"], "45.5");
    assert_eq!(entry["original_price"], "60");
    assert!(entry["name"]["ar"].is_string());
    assert!(entry["name"]["en"].is_string());
    assert!(entry["image"].is_string());
}

#[test]
fn test_preference_slots_hold_bare_values() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    let mut storefront = Storefront::open(&config).unwrap();
    storefront.prefs_mut().set_language(Language::En);
    storefront.prefs_mut().set_dark_mode(true);

    // The language slot is the bare code, not a JSON string.
    let lang = std::fs::read_to_string(config.data_dir.join("lang")).unwrap();
    assert_eq!(lang, "en");
    let dark = std::fs::read_to_string(config.data_dir.join("dark")).unwrap();
    assert_eq!(dark, "true");
}

#[test]
fn test_favorite_slots_are_one_json_boolean_per_product() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::open(dir.path()).unwrap();
    let mut favorites = FavoriteStore::new(storage.clone());
    favorites.toggle(ProductId::new(3));
    favorites.toggle(ProductId::new(5));
    favorites.toggle(ProductId::new(5));

    assert_eq!(storage.get("like-3").unwrap().as_deref(), Some("true"));
    assert_eq!(storage.get("like-5").unwrap().as_deref(), Some("false"));
    assert_eq!(storage.get("like-4").unwrap(), None);
}

// ============================================================================
// Sample catalog
// ============================================================================

fn sample_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/products.json")
}

#[test]
fn test_sample_catalog_loads() {
    let catalog = Catalog::load(&sample_catalog_path()).unwrap();
    assert_eq!(catalog.len(), 8);

    let featured: Vec<i64> = catalog.featured().map(|p| p.id.as_i64()).collect();
    let suggested: Vec<i64> = catalog.ai_suggested().map(|p| p.id.as_i64()).collect();
    assert_eq!(featured, vec![1, 6, 8]);
    assert_eq!(suggested, vec![2, 7, 8]);

    for product in catalog.products() {
        assert!(!product.name.ar.is_empty());
        assert!(!product.name.en.is_empty());
        assert!(!product.image.is_empty());
    }
}

#[test]
fn test_sample_catalog_derived_prices() {
    let catalog = Catalog::load(&sample_catalog_path()).unwrap();

    let oud = catalog.get(ProductId::new(1)).unwrap();
    assert_eq!(oud.pricing.discount_percent(), Some(24));
    assert_eq!(oud.effective_price(), dec("45.5"));

    let rose_water = catalog.get(ProductId::new(5)).unwrap();
    assert_eq!(rose_water.pricing.discount_percent(), Some(21));

    let gift_set = catalog.get(ProductId::new(8)).unwrap();
    assert_eq!(gift_set.effective_price(), dec("35"));
}

#[test]
fn test_sample_catalog_drives_a_cart() {
    let catalog = Catalog::load(&sample_catalog_path()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::open(dir.path()).unwrap();
    let mut storefront = Storefront::with_storage(catalog, storage);

    let musk = storefront.catalog().get(ProductId::new(2)).unwrap().clone();
    let burner = storefront.catalog().get(ProductId::new(6)).unwrap().clone();
    storefront.cart_mut().add(musk).unwrap();
    storefront.cart_mut().add(burner).unwrap();

    // 12.75 + min(14.5, 22)
    assert_eq!(storefront.cart().total_price(), dec("27.25"));
}

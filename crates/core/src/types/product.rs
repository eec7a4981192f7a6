//! Product catalog records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::language::LocalizedText;
use crate::types::price::Pricing;

/// A product in the static catalog.
///
/// Reference data: loaded once at startup and never mutated by the state
/// layer. Collections hold full snapshots of these records, keyed by
/// [`ProductId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display name in both storefront languages.
    pub name: LocalizedText,
    /// URI of the product photo.
    pub image: String,
    /// Fixed price or priced variations.
    #[serde(flatten)]
    pub pricing: Pricing,
    /// Shown in the featured row on the landing page.
    #[serde(default)]
    pub is_featured: bool,
    /// Shown in the recommendation feed.
    #[serde(default)]
    pub ai_suggested: bool,
}

impl Product {
    /// Unit price this product contributes to a collection total.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.pricing.effective_price()
    }
}

/// Sum of effective unit prices over `products`.
///
/// An empty collection totals zero.
#[must_use]
pub fn total_price<'a, I>(products: I) -> Decimal
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().map(Product::effective_price).sum()
}

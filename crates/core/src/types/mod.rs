//! Core types for Souq.
//!
//! This module provides type-safe wrappers for the storefront's domain
//! concepts.

pub mod id;
pub mod language;
pub mod price;
pub mod product;

pub use id::ProductId;
pub use language::{Language, LocalizedText};
pub use price::{PriceRange, Pricing, Variation};
pub use product::{Product, total_price};

//! Souq Core - Shared types library.
//!
//! This crate provides common types used across all Souq components:
//! - `storefront` - Client-state layer (catalog, collections, preferences)
//!
//! # Architecture
//!
//! The core crate contains only types and pure computations - no I/O, no
//! storage access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identity, bilingual text, and pricing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Souq Storefront state library.
//!
//! The client-state layer of the storefront: the shopping cart, the
//! comparison tray, and the per-product favorites, each mirrored
//! synchronously into persistent string-keyed storage, plus the static
//! product catalog, the persisted presentation preferences, and product
//! share links. The rendering layer consumes all of it through one
//! explicitly constructed [`state::Storefront`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod prefs;
pub mod share;
pub mod state;
pub mod storage;
pub mod stores;

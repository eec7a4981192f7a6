//! Integration tests for Souq.
//!
//! The tests exercise the storefront state layer end to end: collection
//! stores over both storage backends, slot round-trips across store
//! instances, and the shipped sample catalog.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p souq-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - Shopper flows over in-memory storage
//! - `persistence` - Slot wire format and file-backed round-trips

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fixtures;

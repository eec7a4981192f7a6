//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SOUQ_DATA_DIR` - Directory holding the persistent state slots (default: data/storage)
//! - `SOUQ_CATALOG` - Path of the static product catalog (default: data/products.json)

use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "data/storage";
const DEFAULT_CATALOG: &str = "data/products.json";

/// Storefront state-layer configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the persistent slot files
    pub data_dir: PathBuf,
    /// Path of the static product catalog JSON
    pub catalog_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable has a default, so loading never fails.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            data_dir: get_env_or_default("SOUQ_DATA_DIR", DEFAULT_DATA_DIR).into(),
            catalog_path: get_env_or_default("SOUQ_CATALOG", DEFAULT_CATALOG).into(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

//! JSON collection loading.
//!
//! A data directory holds three files, each a JSON array:
//! `users.json`, `categories.json` and `products.json`. Field names follow
//! the camelCase shape of [`catalog_core::models`].

use std::path::{Path, PathBuf};

use catalog_core::catalog::Catalog;
use catalog_core::error::{CatalogError, Result};
use catalog_core::models::{Category, Product, User};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// The three collections exactly as loaded, before enrichment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCatalog {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl RawCatalog {
    /// Run the joins and produce the read-only [`Catalog`].
    pub fn into_catalog(self) -> Catalog {
        Catalog::new(self.users, self.categories, self.products)
    }
}

/// `true` when `dir` contains all three collection files.
pub fn is_data_dir(dir: &Path) -> bool {
    collection_paths(dir).iter().all(|p| p.is_file())
}

/// Load all three collections from `dir`.
pub fn load_dir(dir: &Path) -> Result<RawCatalog> {
    if !dir.is_dir() {
        return Err(CatalogError::DataPathNotFound(dir.to_path_buf()));
    }

    let [users_path, categories_path, products_path] = collection_paths(dir);

    let raw = RawCatalog {
        users: read_collection(&users_path)?,
        categories: read_collection(&categories_path)?,
        products: read_collection(&products_path)?,
    };

    info!(
        "Loaded {} users, {} categories, {} products from {}",
        raw.users.len(),
        raw.categories.len(),
        raw.products.len(),
        dir.display()
    );

    Ok(raw)
}

/// Read a single JSON array file into a `Vec<T>`.
pub fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(CatalogError::MissingCollection(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<T> = serde_json::from_str(&content)?;

    debug!("Read {} records from {}", items.len(), path.display());
    Ok(items)
}

fn collection_paths(dir: &Path) -> [PathBuf; 3] {
    [
        dir.join(USERS_FILE),
        dir.join(CATEGORIES_FILE),
        dir.join(PRODUCTS_FILE),
    ]
}

// ── Tests ──────────────────────────────────────────────────────────────────────

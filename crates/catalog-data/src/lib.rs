//! Data ingestion layer for the product catalog.
//!
//! Loads the three raw collections (users, categories, products) from JSON
//! files on disk, or supplies the bundled demo collections when no data
//! directory is available.

pub mod builtin;
pub mod reader;

pub use catalog_core as core;

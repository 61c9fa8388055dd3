//! Core domain for the product catalog.
//!
//! Holds the entity model, the joins that resolve category owners and
//! product categories, the filter engine, and the CLI settings shared by
//! the other crates.

pub mod catalog;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod formatting;
pub mod models;
pub mod settings;

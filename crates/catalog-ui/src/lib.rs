//! Terminal UI layer for the product catalog.
//!
//! Provides themes, the header component, the filter panel, the product
//! table and the main application event loop built on [`ratatui`], plus a
//! plain-text listing for non-interactive use.

pub mod app;
pub mod components;
pub mod filter_panel;
pub mod plain_view;
pub mod product_table;
pub mod themes;

pub use catalog_core as core;

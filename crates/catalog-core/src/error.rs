use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the edges of the catalog: loading data, the terminal,
/// and configuration. The filter engine itself never fails.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The data directory does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// One of `users.json`, `categories.json`, `products.json` is missing.
    #[error("Missing collection file: {0}")]
    MissingCollection(PathBuf),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the catalog crates.
pub type Result<T> = std::result::Result<T, CatalogError>;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use catalog_data::reader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// `~/.product-catalog`, or `./.product-catalog` when there is no home dir.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".product-catalog")
}

/// Ensure `~/.product-catalog/` and `~/.product-catalog/logs/` exist.
pub fn ensure_directories() -> anyhow::Result<()> {
    let dir = app_dir();
    std::fs::create_dir_all(&dir)?;
    std::fs::create_dir_all(dir.join("logs"))?;
    Ok(())
}

/// Log file used by the interactive view when `--log-file` is not given,
/// so log output never lands on the alternate screen.
pub fn default_log_file() -> PathBuf {
    app_dir().join("logs").join("product-catalog.log")
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a CLI level name onto an [`EnvFilter`] directive.
pub fn level_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" | "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Writes to `log_file` (appending, no ANSI colours) when given, otherwise
/// to stderr. `RUST_LOG` takes precedence over `log_level` when set.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(log_level)));

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let stderr_layer = file_layer.is_none().then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Pick the data directory to load.
///
/// 1. `explicit` when given (even if it turns out to be invalid, so the
///    loader can report why).
/// 2. `~/.product-catalog/data/` when it holds all three collection files.
///
/// Returns `None` when neither applies; the caller then uses the bundled
/// collections.
pub fn discover_data_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir.to_path_buf());
    }
    let candidate = app_dir().join("data");
    reader::is_data_dir(&candidate).then_some(candidate)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

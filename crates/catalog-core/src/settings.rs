use clap::Parser;
use std::path::PathBuf;

use crate::filter::FilterState;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Browse and filter a product catalog by owner, name and category
#[derive(Parser, Debug, Clone)]
#[command(
    name = "product-catalog",
    about = "Browse and filter a product catalog by owner, name and category",
    version
)]
pub struct Settings {
    /// Directory containing users.json, categories.json and products.json
    #[arg(long, env = "PRODUCT_CATALOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output mode
    #[arg(long, default_value = "interactive", value_parser = ["interactive", "list", "json"])]
    pub view: String,

    /// Initial owner filter (user id, 0 = all)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub owner: i64,

    /// Initial case-insensitive product name filter
    #[arg(long, default_value = "")]
    pub query: String,

    /// Initial category filter (category id, 0 = all)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub category: i64,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse process arguments and apply derived overrides.
    ///
    /// Nothing is read from or written to disk: every run is configured by
    /// its own command line and environment alone.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] with explicit arguments.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::apply_overrides(Settings::parse_from(args))
    }

    /// `--debug` overrides the log level.
    fn apply_overrides(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Filter state the session starts with.
    pub fn initial_filters(&self) -> FilterState {
        FilterState::with(self.owner, self.query.clone(), self.category)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["product-catalog"]);

        assert!(settings.data_dir.is_none());
        assert_eq!(settings.view, "interactive");
        assert_eq!(settings.owner, 0);
        assert_eq!(settings.query, "");
        assert_eq!(settings.category, 0);
        assert_eq!(settings.theme, "auto");
        assert_eq!(settings.log_level, "WARNING");
        assert!(settings.log_file.is_none());
        assert!(!settings.debug);
        assert!(settings.initial_filters().is_default());
    }

    #[test]
    fn test_settings_cli_filters() {
        let settings = Settings::parse_from([
            "product-catalog",
            "--owner",
            "2",
            "--query",
            "app",
            "--category",
            "3",
        ]);
        assert_eq!(settings.initial_filters(), FilterState::with(2, "app", 3));
    }

    #[test]
    fn test_settings_cli_negative_ids_accepted() {
        let settings = Settings::parse_from(["product-catalog", "--owner", "-1", "--category", "-7"]);
        assert_eq!(settings.owner, -1);
        assert_eq!(settings.category, -7);
        assert!(settings.initial_filters().is_default());
    }

    #[test]
    fn test_settings_rejects_unknown_view() {
        let result = Settings::try_parse_from(["product-catalog", "--view", "grid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_rejects_clear_flag() {
        let result = Settings::try_parse_from(["product-catalog", "--clear"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_args_explicit_values() {
        let settings = Settings::load_from_args([
            "product-catalog",
            "--theme",
            "light",
            "--view",
            "list",
            "--data-dir",
            "/srv/catalog",
        ]);

        assert_eq!(settings.theme, "light");
        assert_eq!(settings.view, "list");
        assert_eq!(settings.data_dir, Some(PathBuf::from("/srv/catalog")));
    }

    #[test]
    fn test_load_from_args_does_not_carry_over_between_runs() {
        let first = Settings::load_from_args([
            "product-catalog",
            "--data-dir",
            "/gone/once",
            "--theme",
            "classic",
            "--view",
            "json",
            "--owner",
            "3",
        ]);
        assert_eq!(first.data_dir, Some(PathBuf::from("/gone/once")));

        let second = Settings::load_from_args(["product-catalog"]);

        assert!(second.data_dir.is_none());
        assert_eq!(second.theme, "auto");
        assert_eq!(second.view, "interactive");
        assert!(second.initial_filters().is_default());
    }

    #[test]
    fn test_load_from_args_debug_overrides_log_level() {
        let settings = Settings::load_from_args(["product-catalog", "--debug"]);
        assert_eq!(settings.log_level, "DEBUG");

        let settings = Settings::load_from_args(["product-catalog", "--log-level", "ERROR"]);
        assert_eq!(settings.log_level, "ERROR");
    }
}

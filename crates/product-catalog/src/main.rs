mod bootstrap;

use anyhow::{Context, Result};
use catalog_core::catalog::Catalog;
use catalog_core::settings::Settings;
use catalog_data::{builtin, reader};
use catalog_ui::app::App;
use catalog_ui::plain_view;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::ensure_directories()?;

    // The interactive view owns the terminal, so default its logs to a file.
    let log_file = settings
        .log_file
        .clone()
        .or_else(|| (settings.view == "interactive").then(bootstrap::default_log_file));
    bootstrap::setup_logging(&settings.log_level, log_file.as_ref())?;

    tracing::info!("Product Catalog v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("View: {}, Theme: {}", settings.view, settings.theme);

    let catalog = load_catalog(&settings)?;
    let filters = settings.initial_filters();

    match settings.view.as_str() {
        "interactive" => {
            let app = App::new(&settings.theme, catalog, filters);
            app.run().context("terminal UI failed")?;
        }

        "list" => {
            print!("{}", plain_view::render_plain(&catalog.visible(&filters)));
        }

        "json" => {
            let visible = catalog.visible(&filters);
            println!("{}", serde_json::to_string_pretty(&visible)?);
        }

        unknown => {
            eprintln!("Unknown view mode: {}", unknown);
        }
    }

    Ok(())
}

/// Load the three collections from the configured data directory, or fall
/// back to the bundled ones, and build the catalog once.
fn load_catalog(settings: &Settings) -> Result<Catalog> {
    let raw = match bootstrap::discover_data_dir(settings.data_dir.as_deref()) {
        Some(dir) => reader::load_dir(&dir)
            .with_context(|| format!("loading catalog from {}", dir.display()))?,
        None => {
            tracing::info!("No data directory found; using bundled catalog");
            builtin::raw_catalog()
        }
    };
    Ok(raw.into_catalog())
}

//! Booklet Application Library
//!
//! Wires the catalog and discovery crates to process concerns: layered
//! settings, tracing bootstrap, and catalog loading.

pub mod settings;
pub mod telemetry;

/// Re-export the member crates for consumers
pub use booklet_catalog as catalog;
pub use booklet_discovery as discovery;

use anyhow::Context;

use booklet_catalog::Catalog;

use crate::settings::Settings;

/// Load the catalog an installation configured, or the compiled-in dataset.
pub fn load_catalog(settings: &Settings) -> anyhow::Result<Catalog> {
    match &settings.catalog.seed {
        Some(path) => {
            let catalog = Catalog::from_path(path)
                .with_context(|| format!("failed to load catalog seed from {}", path.display()))?;
            tracing::info!(path = %path.display(), "catalog loaded from seed file");
            Ok(catalog)
        }
        None => {
            tracing::info!("no seed configured; using the built-in dataset");
            Ok(Catalog::builtin())
        }
    }
}

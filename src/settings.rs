use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "BOOKLET_ENV";
const CONFIG_DIR_ENV: &str = "BOOKLET_CONFIG_DIR";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub discovery: DiscoverySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                // Default to repo root `config` directory.
                std::env::current_dir()
                    .map(|cwd| cwd.join("config"))
                    .expect("unable to resolve current directory")
            });

        let base_path = config_dir.join("base.toml");
        let environment_filename = format!("{}.toml", environment);
        let environment_path = config_dir.join(environment_filename);

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(config::Environment::with_prefix("BOOKLET").separator("_"));

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // Override environment field with parsed enum variant.
        settings.environment = match environment.as_str() {
            "local" => Environment::Local,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                return Err(anyhow!(
                    "unsupported environment '{}'; expected local/staging/production",
                    other
                ));
            }
        };

        Ok(settings)
    }
}

/// Where catalog records come from.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogSettings {
    /// Path to a JSON seed document; the compiled-in dataset is used when
    /// unset. Reachable as `BOOKLET_CATALOG_SEED` or `catalog.seed` in the
    /// config files.
    #[serde(default)]
    pub seed: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Installation defaults for discovery queries.
///
/// The query functions always take these as explicit arguments; this section
/// only decides what the application passes when nothing else does.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverySettings {
    #[serde(default = "DiscoverySettings::default_min_common")]
    pub min_common: usize,
    #[serde(default = "DiscoverySettings::default_featured_limit")]
    pub featured_limit: usize,
}

impl DiscoverySettings {
    fn default_min_common() -> usize {
        booklet_discovery::DEFAULT_MIN_COMMON
    }

    fn default_featured_limit() -> usize {
        4
    }
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            min_common: Self::default_min_common(),
            featured_limit: Self::default_featured_limit(),
        }
    }
}

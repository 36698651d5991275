//! Tracing bootstrap for the Booklet binary.

use tracing_subscriber::EnvFilter;

use crate::settings::LogFormat;

const DEFAULT_FILTER: &str = "booklet_app=info,booklet_catalog=info,booklet_discovery=info";

/// Initialize the global subscriber, honoring `RUST_LOG` when set.
///
/// Later calls are ignored, so tests may call this freely.
pub fn init(log_format: &LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .try_init()
                .ok();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .try_init()
                .ok();
        }
    }
}

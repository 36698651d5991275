//! Error types for catalog loading.
//!
//! Queries against a built catalog never fail: an absent entity is `None` or
//! an empty list at the smallest scope. The only fallible operation in this
//! crate is getting seed data into memory in the first place.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a catalog seed document.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read catalog seed at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog seed is not valid JSON: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

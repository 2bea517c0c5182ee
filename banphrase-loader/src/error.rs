//! error.rs - Error types for the banphrase-loader crate.
//!
//! License: MIT OR APACHE 2.0

use banphrase_core::BanphraseError;
use thiserror::Error;

/// Everything that can go wrong between a pattern-list location and a `Finder`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoaderError {
    #[error("Failed to read pattern list '{location}': {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Request for pattern list '{location}' failed: {source}")]
    Http {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request for pattern list '{location}' returned status {status}")]
    Status { location: String, status: u16 },

    #[error("Failed to build the HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error(transparent)]
    Pattern(#[from] BanphraseError),
}

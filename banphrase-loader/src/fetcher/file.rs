//! Local file fetcher backed by `tokio::fs`.

use async_trait::async_trait;
use log::debug;

use super::ResourceFetcher;
use crate::error::LoaderError;

/// Reads pattern lists from the local file system as UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

#[async_trait]
impl ResourceFetcher for FileFetcher {
    async fn fetch(&self, location: &str) -> Result<String, LoaderError> {
        debug!("Reading pattern list from file {}", location);
        // Invalid UTF-8 surfaces here as an `InvalidData` I/O error.
        tokio::fs::read_to_string(location)
            .await
            .map_err(|source| LoaderError::Io {
                location: location.to_string(),
                source,
            })
    }
}

//! HTTP fetcher backed by `reqwest`.
//!
//! The client is built on first use and then reused for the life of the
//! fetcher, so constructing a fetcher is free and repeated loads share one
//! connection pool.

use async_trait::async_trait;
use log::debug;
use once_cell::sync::OnceCell;
use reqwest::Client;

use super::ResourceFetcher;
use crate::config::LoaderConfig;
use crate::error::LoaderError;

/// Fetches pattern lists with HTTP GET.
#[derive(Debug, Default)]
pub struct HttpFetcher {
    config: LoaderConfig,
    client: OnceCell<Client>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    fn client(&self) -> Result<&Client, LoaderError> {
        self.client.get_or_try_init(|| {
            debug!("Building HTTP client for pattern list fetches.");
            Client::builder().build().map_err(LoaderError::HttpClient)
        })
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, location: &str) -> Result<String, LoaderError> {
        debug!("Requesting pattern list from {}", location);
        let http_error = |source: reqwest::Error| LoaderError::Http {
            location: location.to_string(),
            source,
        };

        let response = self
            .client()?
            .get(location)
            .timeout(self.config.timeout())
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status().as_u16();
        if !self.config.accepts(status) {
            return Err(LoaderError::Status {
                location: location.to_string(),
                status,
            });
        }

        response.text().await.map_err(http_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_is_built_once() {
        let fetcher = HttpFetcher::new();
        let first = fetcher.client().unwrap() as *const Client;
        let second = fetcher.client().unwrap() as *const Client;
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_with_config_keeps_settings() {
        let config = LoaderConfig {
            timeout_secs: 5,
            accepted_statuses: vec![200],
        };
        let fetcher = HttpFetcher::with_config(config.clone());
        assert_eq!(fetcher.config(), &config);
    }
}

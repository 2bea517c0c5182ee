//! Resource fetchers: where pattern-list text comes from.
//!
//! A fetcher turns a location into the raw text of a pattern list. Local
//! builds read files; `wasm32` builds have no file system and fetch over HTTP
//! instead. `DefaultFetcher` picks between the two at compile time.

use async_trait::async_trait;

use crate::error::LoaderError;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod http;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileFetcher;
pub use http::HttpFetcher;

/// Reads the text of a pattern list from some location.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ResourceFetcher: Send + Sync {
    /// Returns the full text at `location`, or the error that prevented reading it.
    async fn fetch(&self, location: &str) -> Result<String, LoaderError>;
}

/// The fetcher used when the caller does not inject one.
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultFetcher = FileFetcher;

/// The fetcher used when the caller does not inject one.
#[cfg(target_arch = "wasm32")]
pub type DefaultFetcher = HttpFetcher;

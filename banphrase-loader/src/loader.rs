//! loader.rs - Pattern-list loading and `Finder` construction.
//!
//! A `PatternLoader` owns an injected `ResourceFetcher`, reads the text at a
//! location through it, parses the text into patterns, and compiles them.
//! Failures at any step are returned; the loader never substitutes an empty
//! pattern list.
//!
//! License: MIT OR APACHE 2.0

use banphrase_core::Finder;
use log::info;

use crate::fetcher::{DefaultFetcher, HttpFetcher, ResourceFetcher};
use crate::error::LoaderError;
use crate::parse::parse_pattern_list;

/// Loads pattern lists through a fetcher.
#[derive(Debug, Clone, Default)]
pub struct PatternLoader<F = DefaultFetcher> {
    fetcher: F,
}

impl<F: ResourceFetcher> PatternLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Reads and parses the pattern list at `location`.
    pub async fn load(&self, location: &str) -> Result<Vec<String>, LoaderError> {
        let contents = self.fetcher.fetch(location).await?;
        let patterns = parse_pattern_list(&contents);
        info!("Loaded {} patterns from {}.", patterns.len(), location);
        Ok(patterns)
    }

    /// Reads the pattern list at `location` and compiles it.
    pub async fn create_finder(&self, location: &str) -> Result<Finder, LoaderError> {
        let patterns = self.load(location).await?;
        Ok(Finder::new(&patterns)?)
    }
}

/// Builds a `Finder` from a pattern-list file.
///
/// Uses the build target's `DefaultFetcher`: a local file read on native
/// targets, an HTTP request on `wasm32`.
pub async fn create_finder_from_file(location: &str) -> Result<Finder, LoaderError> {
    PatternLoader::<DefaultFetcher>::default()
        .create_finder(location)
        .await
}

/// Builds a `Finder` from a pattern list served over HTTP.
pub async fn create_finder_from_url(url: &str) -> Result<Finder, LoaderError> {
    PatternLoader::new(HttpFetcher::new()).create_finder(url).await
}

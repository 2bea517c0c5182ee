//! Configuration management for `banphrase-core`.
//!
//! This module defines the compile options handed to the pattern compiler and
//! a small YAML-backed `FilterConfig` that bundles a pattern list with a mask
//! style, so callers can keep a filter definition next to their other
//! settings.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::engines::regex_finder::Finder;
use crate::errors::BanphraseError;
use crate::masking::MaskStyle;

/// Default upper bound on the size of a compiled alternation, in bytes.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Options applied when compiling the ban and bypass alternations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FinderOptions {
    /// Match patterns without regard to letter case.
    pub case_insensitive: bool,
    /// Size limit for each compiled alternation.
    pub size_limit: usize,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// A pattern list plus the style used to mask what it finds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Ban patterns, and bypass patterns prefixed with `!`.
    pub patterns: Vec<String>,
    pub style: MaskStyle,
    pub options: FinderOptions,
}

impl FilterConfig {
    /// Parses a config from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, BanphraseError> {
        let config: FilterConfig =
            serde_yml::from_str(text).map_err(|e| BanphraseError::Config(e.to_string()))?;
        if config.options.size_limit == 0 {
            return Err(BanphraseError::Config(
                "`options.size_limit` must be greater than 0".to_string(),
            ));
        }
        debug!("Parsed filter config with {} patterns.", config.patterns.len());
        Ok(config)
    }

    /// Loads a config from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!(
            "Loaded {} patterns from file {}.",
            config.patterns.len(),
            path.display()
        );
        Ok(config)
    }

    /// Compiles the configured patterns into a reusable `Finder`.
    pub fn build_finder(&self) -> Result<Finder, BanphraseError> {
        Finder::with_options(&self.patterns, &self.options)
    }
}

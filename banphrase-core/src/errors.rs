//! errors.rs - Custom error types for the banphrase-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Which half of a partitioned pattern list failed to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternGroup {
    Ban,
    Bypass,
}

impl std::fmt::Display for PatternGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternGroup::Ban => f.write_str("ban"),
            PatternGroup::Bypass => f.write_str("bypass"),
        }
    }
}

/// This enum represents all possible error types in the `banphrase-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BanphraseError {
    #[error("Failed to compile {group} patterns: {source}")]
    PatternCompilation {
        group: PatternGroup,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown mask style '{0}'; expected one of \"*\", \"*-\", \"-*\", \"*-*\", \"-*-\" or a tag pair such as \"<s></s>\"")]
    InvalidStyle(String),

    #[error("Token at index {index} with length {length} lies outside a sentence of {sentence_length} characters")]
    TokenOutOfRange {
        index: usize,
        length: usize,
        sentence_length: usize,
    },

    #[error("Tokens must be in ascending index order: index {index} follows {previous}")]
    TokensOutOfOrder { previous: usize, index: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

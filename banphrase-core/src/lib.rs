// banphrase-core/src/lib.rs
//! # banphrase Core Library
//!
//! `banphrase-core` finds banned phrases in text, drops the ones an
//! allow-list of bypass phrases exempts, and renders a redacted copy of the
//! text in one of several masking styles.
//!
//! The library is pure and stateless: it works on in-memory strings and
//! pattern lists only. Reading pattern lists from files or over the network
//! lives in the separate `banphrase-loader` crate.
//!
//! ## Modules
//!
//! * `token`: The `Token` occurrence type and interval helpers.
//! * `patterns`: Splits a pattern list into ban and bypass halves and compiles them.
//! * `engine`: Defines the `PhraseEngine` trait.
//! * `engines`: Contains the regex-based `Finder`.
//! * `masking`: Mask styles and the masker.
//! * `config`: Compile options and the YAML-backed `FilterConfig`.
//! * `headless`: One-shot helpers for find and redact.
//! * `errors`: The `BanphraseError` type.
//!
//! ## Patterns
//!
//! Each pattern is a regular-expression fragment. Fragments starting with `!`
//! are bypass patterns: a banned phrase found inside (or overlapping the start
//! of) a bypass match is not reported. Matching is case-insensitive.
//!
//! ## Usage Example
//!
//! ```rust
//! use banphrase_core::{create_finder, mask, MaskStyle, Token};
//!
//! fn main() -> Result<(), banphrase_core::BanphraseError> {
//!     // Ban "操" on its own, but not inside 体操, 广播操, 操场 or 操练.
//!     let finder = create_finder(&["操", "!(体|广播)操", "!操(练|场)"])?;
//!
//!     let sentence = "操，你只能在操场做广播操";
//!     let tokens = finder.find(sentence);
//!     assert_eq!(tokens, vec![Token::new("操", 0)]);
//!
//!     let masked = mask(sentence, &tokens, &MaskStyle::Full)?;
//!     assert_eq!(masked, "*，你只能在操场做广播操");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `BanphraseError`. Invalid patterns fail at
//! compile time and are never skipped; tokens that do not fit the sentence
//! are rejected by the masker instead of being clamped.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod masking;
pub mod patterns;
pub mod token;

/// Re-exports the configuration types.
pub use config::{FilterConfig, FinderOptions, DEFAULT_SIZE_LIMIT};

/// Re-exports the custom error type for clear error reporting.
pub use errors::{BanphraseError, PatternGroup};

/// Re-exports the engine trait and the regex-based finder.
pub use engine::PhraseEngine;
pub use engines::regex_finder::{create_finder, Finder};

/// Re-exports the masker and its styles.
pub use masking::{get_mask, mask, mask_with, MaskStyle, MASK_CHAR};

/// Re-exports the occurrence type.
pub use token::{is_between, Token};

/// Re-exports the one-shot helpers.
pub use headless::{find, redact, redact_with};

// Lower-level compiler access for callers that want the raw alternations.
pub use patterns::compiler::{
    compile_patterns, partition_patterns, CompiledPatterns, PartitionedPatterns, BYPASS_PREFIX,
};

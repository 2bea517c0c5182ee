// banphrase-core/src/engine.rs
//! Defines the `PhraseEngine` trait.
//!
//! The masker only needs tokens; it does not care where they come from. This
//! trait is the seam between "something that finds phrases" and the
//! one-shot helpers in `headless`, so a caller can plug in its own detector
//! next to the regex-based `Finder`.
//!
//! License: MIT OR APACHE 2.0

use crate::token::Token;

/// Finds phrase occurrences in a sentence.
pub trait PhraseEngine: Send + Sync {
    /// Returns the occurrences in ascending index order.
    fn find(&self, sentence: &str) -> Vec<Token>;

    /// A short name for logs.
    fn name(&self) -> &str;
}

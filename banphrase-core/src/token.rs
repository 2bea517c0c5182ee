// banphrase-core/src/token.rs
//! Provides the `Token` occurrence type shared by the finder and the masker,
//! along with the interval helpers used for overlap reasoning.
//!
//! All offsets and lengths are counted in Unicode scalar values (`char`s), so
//! a token's `index` addresses the same character no matter how many bytes
//! the preceding text occupies.

use serde::{Deserialize, Serialize};

/// A single occurrence of a phrase in a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The exact matched text.
    pub phrase: String,
    /// Zero-based start offset, in chars, in the original sentence.
    pub index: usize,
}

impl Token {
    pub fn new(phrase: impl Into<String>, index: usize) -> Self {
        Self {
            phrase: phrase.into(),
            index,
        }
    }

    /// Length of the phrase in chars.
    pub fn len(&self) -> usize {
        self.phrase.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }

    /// Exclusive end offset of the token's interval.
    pub fn end(&self) -> usize {
        self.index + self.len()
    }

    /// The half-open interval `[index, end)` covered by this token.
    pub fn interval(&self) -> (usize, usize) {
        (self.index, self.end())
    }
}

/// Returns true when `value` lies in the half-open interval `[min, max)`.
pub fn is_between(value: usize, (min, max): (usize, usize)) -> bool {
    value >= min && value < max
}

/// Describes a matched phrase for debug logs without leaking its text.
pub(crate) fn loggable(phrase: &str) -> String {
    format!("[{} chars]", phrase.chars().count())
}

// banphrase-core/src/engines/regex_finder.rs
//! A `PhraseEngine` implementation that uses the ban and bypass regex
//! alternations to find banned phrases.
//!
//! Ban matches are checked against every bypass match; a ban match survives
//! only if no bypass match exempts it, either by containing it or by
//! starting inside it.
//! License: MIT OR APACHE 2.0

use log::{debug, trace};
use regex::Regex;

use crate::config::FinderOptions;
use crate::engine::PhraseEngine;
use crate::errors::BanphraseError;
use crate::patterns::compiler::{compile_patterns, CompiledPatterns};
use crate::token::{is_between, loggable, Token};

/// A match located both in chars (for tokens) and bytes (for slicing).
#[derive(Debug, Clone, Copy)]
struct Hit<'s> {
    phrase: &'s str,
    index: usize,
    len: usize,
    byte_start: usize,
    byte_end: usize,
}

impl Hit<'_> {
    fn end(&self) -> usize {
        self.index + self.len
    }

    fn to_token(self) -> Token {
        Token::new(self.phrase, self.index)
    }
}

/// Collects every non-overlapping match of `regex`, left to right.
///
/// Zero-length matches are kept. After one, the search resumes a char
/// further on, so a match may start right where a previous one ended.
fn collect_hits<'s>(regex: &Regex, sentence: &'s str) -> Vec<Hit<'s>> {
    let mut hits = Vec::new();
    let mut last_byte = 0usize;
    let mut last_char = 0usize;
    let mut at = 0usize;

    while at <= sentence.len() {
        let Some(m) = regex.find_at(sentence, at) else {
            break;
        };
        // Matches arrive in ascending order, so char offsets can be counted
        // incrementally from the previous match.
        last_char += sentence[last_byte..m.start()].chars().count();
        last_byte = m.start();

        let phrase = m.as_str();
        hits.push(Hit {
            phrase,
            index: last_char,
            len: phrase.chars().count(),
            byte_start: m.start(),
            byte_end: m.end(),
        });

        at = if m.is_empty() {
            match sentence[m.end()..].chars().next() {
                Some(c) => m.end() + c.len_utf8(),
                None => break,
            }
        } else {
            m.end()
        };
    }
    hits
}

/// Returns true if any bypass match exempts `ban`.
fn is_bypassed(ban: &Hit<'_>, bypass_hits: &[Hit<'_>], sentence: &str) -> bool {
    bypass_hits.iter().any(|bypass| {
        let bypass_span = (bypass.index, bypass.end());
        if bypass.phrase.contains(ban.phrase) && is_between(ban.index, bypass_span) {
            return true;
        }
        if is_between(bypass.index, (ban.index, ban.end())) {
            // Char and byte offsets are monotonic in each other, so the union
            // span in bytes covers the same chars as the union span in chars.
            let start = ban.byte_start.min(bypass.byte_start);
            let end = ban.byte_end.max(bypass.byte_end);
            return sentence[start..end].contains(bypass.phrase);
        }
        false
    })
}

/// A compiled, reusable banned-phrase matcher.
///
/// Holds no per-call state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Finder {
    compiled: CompiledPatterns,
}

impl Finder {
    /// Compiles `patterns` with the default options.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, BanphraseError> {
        Self::with_options(patterns, &FinderOptions::default())
    }

    pub fn with_options<S: AsRef<str>>(
        patterns: &[S],
        options: &FinderOptions,
    ) -> Result<Self, BanphraseError> {
        let compiled = compile_patterns(patterns, options)?;
        Ok(Self { compiled })
    }

    /// The joined ban alternation; empty when no ban pattern was given.
    pub fn ban_pattern(&self) -> &str {
        self.compiled.ban.as_str()
    }

    /// The joined bypass alternation, if any bypass pattern was given.
    pub fn bypass_pattern(&self) -> Option<&str> {
        self.compiled.bypass.as_ref().map(Regex::as_str)
    }

    /// Finds the banned phrases in `sentence` that no bypass phrase exempts.
    ///
    /// Tokens come back in the order the ban matches were discovered, which is
    /// ascending by index.
    pub fn find(&self, sentence: &str) -> Vec<Token> {
        let ban_hits = collect_hits(&self.compiled.ban, sentence);
        if ban_hits.is_empty() {
            return Vec::new();
        }

        let bypass_hits = match &self.compiled.bypass {
            Some(bypass) => collect_hits(bypass, sentence),
            None => Vec::new(),
        };
        trace!(
            "Found {} ban and {} bypass matches.",
            ban_hits.len(),
            bypass_hits.len()
        );

        let mut result = Vec::with_capacity(ban_hits.len());
        for hit in ban_hits {
            if is_bypassed(&hit, &bypass_hits, sentence) {
                debug!(
                    "Bypassed ban match {} at index {}.",
                    loggable(hit.phrase),
                    hit.index
                );
                continue;
            }
            result.push(hit.to_token());
        }
        result
    }
}

impl PhraseEngine for Finder {
    fn find(&self, sentence: &str) -> Vec<Token> {
        Finder::find(self, sentence)
    }

    fn name(&self) -> &str {
        "regex"
    }
}

/// Compiles `patterns` into a reusable `Finder`.
pub fn create_finder<S: AsRef<str>>(patterns: &[S]) -> Result<Finder, BanphraseError> {
    Finder::new(patterns)
}

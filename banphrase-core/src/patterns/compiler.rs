//! compiler.rs - Turns a pattern list into the ban and bypass alternations.
//!
//! The list is partitioned on the `!` prefix, each half is joined with `|`,
//! and each joined source is compiled once. A finder built from the result
//! holds no other state, so compiling is the only expensive step.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::FinderOptions;
use crate::errors::{BanphraseError, PatternGroup};

/// Marks a pattern as a bypass pattern when it is the first character.
pub const BYPASS_PREFIX: char = '!';

/// A pattern list split into its ban and bypass halves, original order kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedPatterns {
    pub ban: Vec<String>,
    /// Bypass sources with the leading `!` removed.
    pub bypass: Vec<String>,
}

/// The compiled alternations for one pattern list.
///
/// The ban alternation always exists; with no ban patterns it is the empty
/// regex, which matches the empty string at every position. `bypass` is
/// `None` when no bypass pattern was given.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    pub ban: Regex,
    pub bypass: Option<Regex>,
}

/// Splits `patterns` on the bypass prefix.
pub fn partition_patterns<S: AsRef<str>>(patterns: &[S]) -> PartitionedPatterns {
    let mut partitioned = PartitionedPatterns::default();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        match pattern.strip_prefix(BYPASS_PREFIX) {
            Some(bypass) => partitioned.bypass.push(bypass.to_string()),
            None => partitioned.ban.push(pattern.to_string()),
        }
    }
    partitioned
}

/// Compiles a pattern list into its ban and bypass alternations.
///
/// Any invalid fragment fails the whole compilation; nothing is skipped.
pub fn compile_patterns<S: AsRef<str>>(
    patterns: &[S],
    options: &FinderOptions,
) -> Result<CompiledPatterns, BanphraseError> {
    let partitioned = partition_patterns(patterns);
    debug!(
        "Compiling {} ban and {} bypass patterns.",
        partitioned.ban.len(),
        partitioned.bypass.len()
    );

    let ban = compile_group(&partitioned.ban, PatternGroup::Ban, options)?;
    let bypass = if partitioned.bypass.is_empty() {
        debug!("No bypass patterns given; skipping.");
        None
    } else {
        Some(compile_group(&partitioned.bypass, PatternGroup::Bypass, options)?)
    };

    Ok(CompiledPatterns { ban, bypass })
}

fn compile_group(
    sources: &[String],
    group: PatternGroup,
    options: &FinderOptions,
) -> Result<Regex, BanphraseError> {
    let joined = sources.join("|");
    let regex = RegexBuilder::new(&joined)
        .case_insensitive(options.case_insensitive)
        .size_limit(options.size_limit)
        .build()
        .map_err(|source| BanphraseError::PatternCompilation { group, source })?;

    debug!(
        target: "banphrase_core::compiler",
        "Compiled {} alternation of {} patterns.",
        group,
        sources.len()
    );
    Ok(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_keeps_order_and_strips_prefix() {
        let partitioned = partition_patterns(&["a", "!b", "c", "!d"]);
        assert_eq!(partitioned.ban, vec!["a", "c"]);
        assert_eq!(partitioned.bypass, vec!["b", "d"]);
    }

    #[test]
    fn test_only_leading_bang_marks_bypass() {
        let partitioned = partition_patterns(&["a!b", "!!c"]);
        assert_eq!(partitioned.ban, vec!["a!b"]);
        assert_eq!(partitioned.bypass, vec!["!c"]);
    }

    #[test]
    fn test_empty_bypass_group_is_not_compiled() {
        let compiled = compile_patterns(&["foo"], &FinderOptions::default()).unwrap();
        assert_eq!(compiled.ban.as_str(), "foo");
        assert!(compiled.bypass.is_none());
    }

    #[test]
    fn test_empty_ban_group_compiles_to_empty_regex() {
        let compiled = compile_patterns(&["!foo"], &FinderOptions::default()).unwrap();
        assert_eq!(compiled.ban.as_str(), "");
        assert!(compiled.ban.is_match("anything"));
    }

    #[test]
    fn test_groups_are_joined_into_one_alternation() {
        let compiled =
            compile_patterns(&["foo", "bar", "!x", "!y"], &FinderOptions::default()).unwrap();
        assert_eq!(compiled.ban.as_str(), "foo|bar");
        assert_eq!(compiled.bypass.unwrap().as_str(), "x|y");
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let compiled = compile_patterns(&["foo"], &FinderOptions::default()).unwrap();
        assert!(compiled.ban.is_match("FoO"));
    }

    #[test]
    fn test_case_sensitive_option() {
        let options = FinderOptions {
            case_insensitive: false,
            ..FinderOptions::default()
        };
        let compiled = compile_patterns(&["foo"], &options).unwrap();
        assert!(!compiled.ban.is_match("FOO"));
    }

    #[test]
    fn test_invalid_bypass_fragment_fails() {
        let err = compile_patterns(&["foo", "!(bar"], &FinderOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            BanphraseError::PatternCompilation {
                group: PatternGroup::Bypass,
                ..
            }
        ));
    }
}

// File: banphrase-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot use: compile, find, and optionally mask
//! in a single call.
//!
//! Each call compiles its pattern list from scratch. Callers filtering more
//! than one sentence with the same list should build a `Finder` once instead.

use log::debug;

use crate::engine::PhraseEngine;
use crate::engines::regex_finder::Finder;
use crate::errors::BanphraseError;
use crate::masking::{mask, MaskStyle};
use crate::token::Token;

/// Compiles `patterns` and finds the surviving banned phrases in `sentence`.
pub fn find<S: AsRef<str>>(sentence: &str, patterns: &[S]) -> Result<Vec<Token>, BanphraseError> {
    let finder = Finder::new(patterns)?;
    Ok(finder.find(sentence))
}

/// Compiles `patterns`, finds the banned phrases, and masks them.
pub fn redact<S: AsRef<str>>(
    sentence: &str,
    patterns: &[S],
    style: &MaskStyle,
) -> Result<String, BanphraseError> {
    let finder = Finder::new(patterns)?;
    redact_with(&finder, sentence, style)
}

/// Masks whatever `engine` finds in `sentence`.
pub fn redact_with(
    engine: &dyn PhraseEngine,
    sentence: &str,
    style: &MaskStyle,
) -> Result<String, BanphraseError> {
    let tokens = engine.find(sentence);
    debug!("Engine '{}' found {} tokens.", engine.name(), tokens.len());
    mask(sentence, &tokens, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A fixed-position engine, standing in for a caller's own detector.
    struct Fixed(Vec<Token>);

    impl PhraseEngine for Fixed {
        fn find(&self, _sentence: &str) -> Vec<Token> {
            self.0.clone()
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_find_one_shot() {
        let sentence = "真是草泥马，心中有千万只草泥马奔腾而过";
        let tokens = find(sentence, &["草泥马", "!(一)?(头|只)草泥马"]).unwrap();
        assert_eq!(tokens, vec![Token::new("草泥马", 2)]);
    }

    #[test]
    fn test_find_propagates_compilation_errors() {
        let err = find("text", &["[unclosed"]).unwrap_err();
        assert!(matches!(err, BanphraseError::PatternCompilation { .. }));
    }

    #[test]
    fn test_redact_one_shot() {
        let out = redact("call me a jerk, jerkface", &["jerk"], &MaskStyle::Full).unwrap();
        assert_eq!(out, "call me a ****, ****face");
    }

    #[test]
    fn test_redact_with_custom_engine() {
        let engine = Fixed(vec![Token::new("1234", 5)]);
        let out = redact_with(&engine, "card 1234 ok", &MaskStyle::Tail).unwrap();
        assert_eq!(out, "card 12** ok");
    }
}

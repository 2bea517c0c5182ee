// banphrase-core/tests/finder_tests.rs
use banphrase_core::{create_finder, find, BanphraseError, Finder, Token};
use std::sync::Arc;
use std::thread;
use test_log::test;

const SENTENCE: &str = "操，草泥马，心中有千万只草泥马奔腾而过，你只能在操场操练广播操或体操";

fn blacklist() -> Vec<&'static str> {
    vec![
        "草泥马",
        "!(一)?(头|只)草泥马",
        "操(尼玛|你妈)?",
        "!(体|广播)操",
        "!操(练|场)",
    ]
}

#[test]
fn test_find_sensitive_phrases() {
    let tokens = find("真是草泥马，心中有千万只草泥马奔腾而过", &["草泥马"]).unwrap();
    assert_eq!(
        tokens,
        vec![Token::new("草泥马", 2), Token::new("草泥马", 12)]
    );
}

#[test]
fn test_find_bypasses_some_phrases() {
    let tokens = find(
        "真是草泥马，心中有千万只草泥马奔腾而过",
        &["草泥马", "!(一)?(头|只)草泥马"],
    )
    .unwrap();
    assert_eq!(tokens, vec![Token::new("草泥马", 2)]);
}

#[test]
fn test_find_more_phrases_and_bypass_more_phrases() {
    let tokens = find(SENTENCE, &blacklist()).unwrap();
    assert_eq!(tokens, vec![Token::new("操", 0), Token::new("草泥马", 2)]);
}

#[test]
fn test_created_finder_is_reusable() {
    let finder = create_finder(&["草泥马"]).unwrap();
    let expected = vec![Token::new("草泥马", 2), Token::new("草泥马", 12)];
    assert_eq!(finder.find("真是草泥马，心中有千万只草泥马奔腾而过"), expected);
    assert_eq!(finder.find("真是草泥马，心中有千万只草泥马奔腾而过"), expected);
    assert!(finder.find("风平浪静").is_empty());
}

#[test]
fn test_longer_ban_alternative_is_reported_whole() {
    let tokens = find("操你妈，去操场", &blacklist()).unwrap();
    assert_eq!(tokens, vec![Token::new("操你妈", 0)]);
}

#[test]
fn test_tokens_are_ascending_and_fit_the_sentence() {
    let finder = Finder::new(&blacklist()).unwrap();
    let sentence = "草泥马操草泥马，体操操场，一头草泥马和操尼玛";
    let tokens = finder.find(sentence);
    let sentence_length = sentence.chars().count();

    assert!(!tokens.is_empty());
    for pair in tokens.windows(2) {
        assert!(pair[0].end() <= pair[1].index);
    }
    for token in &tokens {
        assert!(token.end() <= sentence_length);
        let at: String = sentence.chars().skip(token.index).take(token.len()).collect();
        assert_eq!(at, token.phrase);
    }
}

#[test]
fn test_bypass_outside_ban_match_does_not_exempt() {
    // The bypass phrase appears elsewhere in the sentence, far from the ban match.
    let tokens = find("操 ... 体操", &blacklist()).unwrap();
    assert_eq!(tokens, vec![Token::new("操", 0)]);
}

#[test]
fn test_zero_length_bypass_match_exempts_ban_match() {
    let tokens = find("ab", &["ab", "!x?"]).unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_zero_length_ban_matches_are_reported() {
    let tokens = find("baa", &["a*"]).unwrap();
    assert_eq!(
        tokens,
        vec![Token::new("", 0), Token::new("aa", 1), Token::new("", 3)]
    );
}

#[test]
fn test_invalid_ban_pattern_is_an_error() {
    let err = Finder::new(&["(unclosed"]).unwrap_err();
    assert!(matches!(err, BanphraseError::PatternCompilation { .. }));
}

#[test]
fn test_finder_is_shareable_across_threads() {
    let finder = Arc::new(Finder::new(&blacklist()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let finder = Arc::clone(&finder);
            thread::spawn(move || finder.find(SENTENCE))
        })
        .collect();

    for handle in handles {
        let tokens = handle.join().unwrap();
        assert_eq!(tokens, vec![Token::new("操", 0), Token::new("草泥马", 2)]);
    }
}

#[test]
fn test_token_serializes_to_interop_shape() {
    let json = serde_json::to_string(&Token::new("草泥马", 2)).unwrap();
    assert_eq!(json, r#"{"phrase":"草泥马","index":2}"#);
    let back: Token = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Token::new("草泥马", 2));
}

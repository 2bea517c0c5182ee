//! parse.rs - The pattern-list text format.
//!
//! One pattern per line. Lines are trimmed; blank lines and lines starting
//! with `#` are dropped; whitespace followed by `#` starts an inline comment.
//! A leading `!` is left in place for the compiler to read as a bypass mark.
//!
//! ```text
//! # swear words
//! 草泥马
//! !(一)?(头|只)草泥马    # counting alpacas is fine
//! ```

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE_BREAKS: Regex = Regex::new(r"[\r\n]+").expect("line break regex is valid");
    static ref INLINE_COMMENT: Regex = Regex::new(r"\s+#").expect("inline comment regex is valid");
}

/// Parses pattern-list text into its ordered patterns.
pub fn parse_pattern_list(contents: &str) -> Vec<String> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

    LINE_BREAKS
        .split(contents)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| INLINE_COMMENT.split(line).next().unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines_are_dropped() {
        let text = "# header\n\n   \nfoo\n  # indented comment\nbar\n";
        assert_eq!(parse_pattern_list(text), vec!["foo", "bar"]);
    }

    #[test]
    fn test_lines_are_trimmed() {
        assert_eq!(parse_pattern_list("  foo  \n\tbar\t"), vec!["foo", "bar"]);
    }

    #[test]
    fn test_inline_comments_are_stripped() {
        let text = "foo # the foo\n!foobar\t# allowed\nbaz#not-a-comment";
        assert_eq!(
            parse_pattern_list(text),
            vec!["foo", "!foobar", "baz#not-a-comment"]
        );
    }

    #[test]
    fn test_crlf_and_bom() {
        let text = "\u{feff}foo\r\n\r\nbar\r\n";
        assert_eq!(parse_pattern_list(text), vec!["foo", "bar"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_pattern_list("").is_empty());
        assert!(parse_pattern_list("\n\n# only comments\n").is_empty());
    }
}

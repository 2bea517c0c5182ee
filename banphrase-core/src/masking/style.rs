// banphrase-core/src/masking/style.rs
//! Mask style parsing.
//!
//! A style is written the way callers pass it around: one of the five
//! asterisk tokens, or a tag pair such as `<s></s>` whose opening and closing
//! tags wrap each occurrence instead of masking it.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::BanphraseError;

lazy_static! {
    /// An opening tag immediately followed by a closing tag, nothing else.
    static ref TAG_STYLE: Regex =
        Regex::new(r"^(<.+?>)(</.+?>)$").expect("tag style regex is valid");
}

/// How a matched span is rendered by the masker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MaskStyle {
    /// `*`: every char of the span becomes `*`.
    #[default]
    Full,
    /// `*-`: the leading half is masked.
    Head,
    /// `-*`: the trailing half is masked.
    Tail,
    /// `*-*`: the leading and trailing thirds are masked.
    Ends,
    /// `-*-`: the middle third is masked.
    Middle,
    /// `<open></close>`: the span is kept and wrapped in the two tags.
    Wrap { open: String, close: String },
}

impl MaskStyle {
    /// Builds a wrap style from its two tags.
    pub fn wrap(open: impl Into<String>, close: impl Into<String>) -> Self {
        MaskStyle::Wrap {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn is_wrap(&self) -> bool {
        matches!(self, MaskStyle::Wrap { .. })
    }
}

impl FromStr for MaskStyle {
    type Err = BanphraseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "*" => Ok(MaskStyle::Full),
            "*-" => Ok(MaskStyle::Head),
            "-*" => Ok(MaskStyle::Tail),
            "*-*" => Ok(MaskStyle::Ends),
            "-*-" => Ok(MaskStyle::Middle),
            other => {
                let caps = TAG_STYLE
                    .captures(other)
                    .ok_or_else(|| BanphraseError::InvalidStyle(other.to_string()))?;
                Ok(MaskStyle::wrap(&caps[1], &caps[2]))
            }
        }
    }
}

impl TryFrom<String> for MaskStyle {
    type Error = BanphraseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MaskStyle> for String {
    fn from(style: MaskStyle) -> Self {
        style.to_string()
    }
}

impl fmt::Display for MaskStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskStyle::Full => f.write_str("*"),
            MaskStyle::Head => f.write_str("*-"),
            MaskStyle::Tail => f.write_str("-*"),
            MaskStyle::Ends => f.write_str("*-*"),
            MaskStyle::Middle => f.write_str("-*-"),
            MaskStyle::Wrap { open, close } => write!(f, "{}{}", open, close),
        }
    }
}

// banphrase-core/src/masking/mod.rs
//! The masker: rewrites a sentence so that each token's span is obscured or
//! wrapped according to a `MaskStyle`.
//!
//! Tokens are applied in the order given against a running offset. The five
//! asterisk styles never change the sentence length; the wrap style grows it
//! by the length of both tags per token, and the offset absorbs that growth
//! so later tokens still land on their original text.
//!
//! Positions and lengths are in chars. Exposed characters are decided by
//! round-half-up arithmetic, except the masked third of `-*-` which rounds up.

use log::debug;

use crate::errors::BanphraseError;
use crate::token::Token;

pub mod style;

pub use style::MaskStyle;

/// The char used for every masked position.
pub const MASK_CHAR: char = '*';

/// Returns a run of `length` mask chars.
pub fn get_mask(length: usize) -> String {
    std::iter::repeat(MASK_CHAR).take(length).collect()
}

/// `round(n / d)` with halves rounded up.
fn round_div(n: usize, d: usize) -> usize {
    (2 * n + d) / (2 * d)
}

fn fill(buf: &mut [char], start: usize, end: usize) {
    for c in &mut buf[start..end] {
        *c = MASK_CHAR;
    }
}

fn mask_head(buf: &mut [char], index: usize, length: usize) {
    let masked = round_div(length, 2);
    fill(buf, index, index + masked);
}

fn mask_tail(buf: &mut [char], index: usize, length: usize) {
    let masked = round_div(length, 2);
    fill(buf, index + length - masked, index + length);
}

impl MaskStyle {
    /// Renders one span of `length` chars at `index` in place.
    ///
    /// Returns the number of chars the buffer grew by.
    fn apply(&self, buf: &mut Vec<char>, index: usize, length: usize) -> usize {
        match self {
            MaskStyle::Full => {
                fill(buf, index, index + length);
                0
            }
            MaskStyle::Head => {
                mask_head(buf, index, length);
                0
            }
            MaskStyle::Tail => {
                mask_tail(buf, index, length);
                0
            }
            MaskStyle::Ends => {
                if length < 3 {
                    mask_head(buf, index, length);
                } else {
                    let third = round_div(length, 3);
                    fill(buf, index, index + third);
                    fill(buf, index + length - third, index + length);
                }
                0
            }
            MaskStyle::Middle => {
                if length < 3 {
                    mask_tail(buf, index, length);
                } else {
                    let third = length.div_ceil(3);
                    let lead = (length - third) / 2;
                    fill(buf, index + lead, index + lead + third);
                }
                0
            }
            MaskStyle::Wrap { open, close } => {
                let close_at = index + length;
                buf.splice(close_at..close_at, close.chars());
                buf.splice(index..index, open.chars());
                open.chars().count() + close.chars().count()
            }
        }
    }
}

/// Masks each token's span in `sentence` using `style`.
///
/// Tokens must be in ascending index order and lie within the sentence;
/// anything else is rejected before the sentence is touched further.
pub fn mask(
    sentence: &str,
    tokens: &[Token],
    style: &MaskStyle,
) -> Result<String, BanphraseError> {
    let mut buf: Vec<char> = sentence.chars().collect();
    let sentence_length = buf.len();
    let mut offset = 0usize;
    let mut previous: Option<usize> = None;

    for token in tokens {
        if let Some(previous) = previous {
            if token.index < previous {
                return Err(BanphraseError::TokensOutOfOrder {
                    previous,
                    index: token.index,
                });
            }
        }
        previous = Some(token.index);

        let length = token.len();
        let fits = token
            .index
            .checked_add(length)
            .is_some_and(|end| end <= sentence_length);
        if !fits {
            return Err(BanphraseError::TokenOutOfRange {
                index: token.index,
                length,
                sentence_length,
            });
        }

        offset += style.apply(&mut buf, token.index + offset, length);
    }

    debug!("Masked {} tokens with style '{}'.", tokens.len(), style);
    Ok(buf.into_iter().collect())
}

/// Parses `style` and masks with it; see [`mask`].
pub fn mask_with(sentence: &str, tokens: &[Token], style: &str) -> Result<String, BanphraseError> {
    let style: MaskStyle = style.parse()?;
    mask(sentence, tokens, &style)
}

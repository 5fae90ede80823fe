use super::model::{MaskToken, MaskedOutput, PlaceholderKind, Template};

/// Punctuation a previous masking pass may have written into the text.
const MASK_PUNCTUATION: [char; 6] = ['.', '+', '-', '/', '(', ')'];

pub(super) fn token_accepts(kind: PlaceholderKind, ch: char) -> bool {
    match kind {
        PlaceholderKind::Digit => ch.is_ascii_digit(),
        PlaceholderKind::Letter => ch.is_alphabetic(),
        PlaceholderKind::Any => true,
    }
}

/// Removes mask punctuation, keeping whitespace.
pub fn unmasked_text(text: &str) -> String {
    text.chars()
        .filter(|ch| !MASK_PUNCTUATION.contains(ch))
        .collect()
}

pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Walks `template` and `raw_input` in lockstep. Output stops at the first
/// placeholder the input does not satisfy, and when the input runs out.
pub fn apply_mask(template: &Template, raw_input: &str) -> MaskedOutput {
    let input: Vec<char> = raw_input.chars().filter(|ch| !ch.is_whitespace()).collect();
    let mut out = String::new();
    let mut input_idx = 0usize;

    for token in template.tokens() {
        let Some(&ch) = input.get(input_idx) else {
            break;
        };
        match token {
            MaskToken::Literal(literal) => out.push(*literal),
            MaskToken::Placeholder(kind) => {
                if !token_accepts(*kind, ch) {
                    break;
                }
                out.push(ch);
                input_idx += 1;
            }
        }
    }

    MaskedOutput {
        text: out,
        consumed_input_len: input_idx,
    }
}

//! Vocabulary tokens
//!
//! The game's lexer turned every character of a word into a code in 0..40
//! (A-Z = 1..26, '-' = 27, digits 0-9 = 30..39, 0 = nothing) and packed the
//! codes three at a time into a token:
//!
//! ```text
//! token = first * 1600 + second * 40 + third
//! ```
//!
//! Words were truncated to six characters, so every vocabulary word is a pair
//! of tokens. Missing characters are 0.

use crate::error::{DecodeError, EncodeError};
use log::{debug, trace};
use std::collections::HashMap;

/// Number of distinct character codes per digit
pub const RADIX: i64 = 40;

/// Weight of the first digit of a token
pub const FIRST_WEIGHT: i64 = RADIX * RADIX;

/// Exclusive upper bound of a valid token
pub const TOKEN_LIMIT: i64 = RADIX * RADIX * RADIX;

/// Characters per token
pub const CHARS_PER_TOKEN: usize = 3;

/// Significant characters of a word; the rest are ignored
pub const WORD_LENGTH: usize = 2 * CHARS_PER_TOKEN;

const HYPHEN_CODE: i64 = 27;
const DIGIT_BASE: i64 = 30;

lazy_static! {
    static ref CHAR_CODES: HashMap<char, u8> = {
        let mut m = HashMap::new();
        for code in 1..RADIX {
            if let Ok(Some(ch)) = char_for_code(code) {
                m.insert(ch, code as u8);
            }
        }
        m
    };
}

/// Map a character code to its character. Code 0 is the empty character.
pub fn char_for_code(code: i64) -> Result<Option<char>, DecodeError> {
    match code {
        0 => Ok(None),
        1..=26 => Ok(Some((b'A' + (code - 1) as u8) as char)),
        HYPHEN_CODE => Ok(Some('-')),
        30..=39 => Ok(Some((b'0' + (code - DIGIT_BASE) as u8) as char)),
        _ => Err(DecodeError::InvalidCharCode(code)),
    }
}

/// Split a token into its three character codes, most significant first.
///
/// Division floors, so a negative token yields a negative first digit and a
/// token past `TOKEN_LIMIT` yields a first digit of 40 or more. Both are
/// rejected later by `char_for_code`.
pub fn digits(token: i64) -> [i64; 3] {
    let first = token.div_euclid(FIRST_WEIGHT);
    let rest = token.rem_euclid(FIRST_WEIGHT);
    let second = rest / RADIX;
    let third = rest - second * RADIX;
    [first, second, third]
}

/// Decompress one token into up to three characters
pub fn decompress(token: i64) -> Result<String, DecodeError> {
    let codes = digits(token);
    trace!("token {} = codes {:?}", token, codes);

    let mut fragment = String::with_capacity(CHARS_PER_TOKEN);
    for code in codes {
        if let Some(ch) = char_for_code(code)? {
            fragment.push(ch);
        }
    }
    Ok(fragment)
}

/// Decode a vocabulary word from its pair of tokens
pub fn decode_word(first: i64, second: i64) -> Result<String, DecodeError> {
    let mut word = decompress(first)?;
    word.push_str(&decompress(second)?);
    debug!("tokens ({}, {}) -> '{}'", first, second, word);
    Ok(word)
}

/// Map a character to its code. Letters are accepted in either case.
pub fn code_for_char(ch: char) -> Result<u8, EncodeError> {
    CHAR_CODES
        .get(&ch.to_ascii_uppercase())
        .copied()
        .ok_or(EncodeError::UnencodableChar(ch))
}

/// Compress up to three characters into one token
pub fn compress(chunk: &str) -> Result<u16, EncodeError> {
    if chunk.chars().count() > CHARS_PER_TOKEN {
        return Err(EncodeError::ChunkTooLong(chunk.to_string()));
    }

    let mut codes = [0u8; CHARS_PER_TOKEN];
    for (slot, ch) in codes.iter_mut().zip(chunk.chars()) {
        *slot = code_for_char(ch)?;
    }

    let token = codes
        .iter()
        .fold(0u16, |acc, &code| acc * RADIX as u16 + code as u16);
    trace!("chunk '{}' = codes {:?} -> token {}", chunk, codes, token);
    Ok(token)
}

/// Encode a word as the pair of tokens the lexer would produce
pub fn encode_word(word: &str) -> Result<(u16, u16), EncodeError> {
    let significant: Vec<char> = word.chars().take(WORD_LENGTH).collect();
    if word.chars().count() > WORD_LENGTH {
        debug!("truncating '{}' to {} characters", word, WORD_LENGTH);
    }

    let split = significant.len().min(CHARS_PER_TOKEN);
    let head: String = significant[..split].iter().collect();
    let tail: String = significant[split..].iter().collect();
    Ok((compress(&head)?, compress(&tail)?))
}

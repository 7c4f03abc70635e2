//! Conversion between text characters and letter codes.
//!
//! The machine only ever works on the 26 uppercase Latin letters. Internally
//! a letter is its code in `0..26` (`'A'` is 0); characters are only seen at
//! the text boundary.

use crate::error::EnigmaError;

/// Number of letters on every wheel, plug and contact.
pub const ALPHABET_SIZE: usize = 26;

/// Maps `'A'..='Z'` to `0..26`.
pub fn to_index(c: char) -> Result<usize, EnigmaError> {
    if c.is_ascii_uppercase() {
        Ok(c as usize - 'A' as usize)
    } else {
        Err(EnigmaError::InvalidCharacter(c))
    }
}

/// Maps a letter code back to its character. `idx` must be below
/// [`ALPHABET_SIZE`].
pub fn to_char(idx: usize) -> char {
    debug_assert!(idx < ALPHABET_SIZE);
    (b'A' + idx as u8) as char
}

/// Checks a letter code coming in through the public API.
pub fn check_code(idx: usize) -> Result<usize, EnigmaError> {
    if idx < ALPHABET_SIZE {
        Ok(idx)
    } else {
        Err(EnigmaError::InvalidLetterCode(idx))
    }
}

/// Reduces an arbitrary setting (position or ring) into `0..26`.
pub fn wrap(setting: i32) -> usize {
    setting.rem_euclid(ALPHABET_SIZE as i32) as usize
}

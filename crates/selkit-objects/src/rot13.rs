//! ROT13: rotate each ASCII letter 13 places, preserving case.
//!
//! Anything that is not an ASCII letter passes through unchanged. Applying
//! the transform twice yields the original text.

const ROTATION: u8 = 13;

/// Rotate one character; non-letters are returned as-is.
#[must_use]
pub const fn rotate(c: char) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    // In range: `c` is an ASCII letter.
    #[allow(clippy::cast_possible_truncation)]
    let offset = (c as u8 - base + ROTATION) % 26;
    (base + offset) as char
}

/// ROT13 of `text`, e.g. `"Why did the chicken cross the road?"` becomes
/// `"Jul qvq gur puvpxra pebff gur ebnq?"`.
#[must_use]
pub fn rot13(text: &str) -> String {
    text.chars().map(rotate).collect()
}

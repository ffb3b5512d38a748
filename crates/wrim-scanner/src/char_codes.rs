//! Character classification for the scanner.
//!
//! Classification is ASCII-only. Anything outside these classes is scanned as
//! an illegal character.

pub const SPACE: char = ' ';
pub const TAB: char = '\t';
pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const UNDERSCORE: char = '_';

pub const EQUALS: char = '=';
pub const PLUS: char = '+';
pub const COMMA: char = ',';
pub const SEMICOLON: char = ';';
pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';
pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';

/// Identifier characters: ASCII letters and underscore.
///
/// Digits are deliberately not included, so `x1` scans as `IDENT("x")`
/// followed by `INT("1")`.
#[inline]
#[must_use]
pub const fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == UNDERSCORE
}

/// ASCII decimal digits.
#[inline]
#[must_use]
pub const fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Insignificant characters skipped before every token.
#[inline]
#[must_use]
pub const fn is_whitespace(ch: char) -> bool {
    matches!(ch, SPACE | TAB | LINE_FEED | CARRIAGE_RETURN)
}

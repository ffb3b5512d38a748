//! Token definitions and the keyword table.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::char_codes;

/// The closed set of token categories produced by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    // Special
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,
    Plus,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Function,
    Let,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 14] = [
        TokenKind::Illegal,
        TokenKind::Eof,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Function,
        TokenKind::Let,
    ];

    /// The name a downstream parser sees for this kind.
    ///
    /// Punctuation kinds are named by their symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexical unit together with the exact source text it came from.
///
/// Tokens own their text and never refer back to the scanner or the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-input token, which always carries empty text.
    #[must_use]
    pub const fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
        }
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    #[must_use]
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

// =============================================================================
// Keyword table
// =============================================================================

/// Reserved words, keyed by their exact spelling.
static KEYWORDS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("function", TokenKind::Function);
    map.insert("let", TokenKind::Let);
    map
});

/// Look up `text` in the keyword table. Matching is exact and case-sensitive.
#[must_use]
pub fn text_to_keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// Classify a completed identifier run as a keyword or a plain identifier.
#[must_use]
pub fn lookup_ident(text: &str) -> TokenKind {
    text_to_keyword(text).unwrap_or(TokenKind::Ident)
}

/// Spelling of a keyword kind, or `None` for non-keywords.
#[must_use]
pub fn keyword_to_text(kind: TokenKind) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|&(_, &k)| k == kind)
        .map(|(&text, _)| text)
}

/// The single-character symbol for `ch`, if it is one.
#[must_use]
pub const fn char_to_punctuation(ch: char) -> Option<TokenKind> {
    match ch {
        char_codes::EQUALS => Some(TokenKind::Assign),
        char_codes::PLUS => Some(TokenKind::Plus),
        char_codes::OPEN_PAREN => Some(TokenKind::LParen),
        char_codes::CLOSE_PAREN => Some(TokenKind::RParen),
        char_codes::OPEN_BRACE => Some(TokenKind::LBrace),
        char_codes::CLOSE_BRACE => Some(TokenKind::RBrace),
        char_codes::COMMA => Some(TokenKind::Comma),
        char_codes::SEMICOLON => Some(TokenKind::Semicolon),
        _ => None,
    }
}

/// Source text of a punctuation kind, or `None` for other kinds.
#[must_use]
pub const fn punctuation_to_text(kind: TokenKind) -> Option<&'static str> {
    if token_is_punctuation(kind) {
        Some(kind.as_str())
    } else {
        None
    }
}

#[must_use]
pub const fn token_is_keyword(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Function | TokenKind::Let)
}

#[must_use]
pub const fn token_is_punctuation(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
    )
}

#[must_use]
pub const fn token_is_literal(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Int)
}

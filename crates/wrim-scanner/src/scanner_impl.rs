//! Scanner implementation.
//!
//! The scanner is a single-pass, forward-only cursor over a borrowed source
//! text. Each call to [`Scanner::next_token`] skips insignificant whitespace and
//! produces exactly one token. Malformed input never fails: characters the
//! scanner does not recognize come back as `ILLEGAL` tokens.

use std::fmt;
use std::iter::FusedIterator;

use tracing::debug;
use wrim_common::Span;

use crate::char_codes::{is_digit, is_letter, is_whitespace};
use crate::observer::TokenObserver;
use crate::token::{Token, TokenKind, char_to_punctuation, lookup_ident};

/// Pull-based tokenizer.
pub struct Scanner<'a> {
    /// Full source being scanned.
    source: &'a str,
    /// Byte offset of `ch`.
    position: usize,
    /// Byte offset of the character after `ch`.
    read_position: usize,
    /// Character under examination; `None` once the input is exhausted.
    ch: Option<char>,
    token_start: usize,
    token_end: usize,
    debug: bool,
    observer: Option<Box<dyn TokenObserver + 'a>>,
    /// Set once the iterator adapter has yielded `EOF`.
    iter_done: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned on the first character of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let mut scanner = Self {
            source,
            position: 0,
            read_position: 0,
            ch: None,
            token_start: 0,
            token_end: 0,
            debug: false,
            observer: None,
            iter_done: false,
        };
        scanner.read_char();
        scanner
    }

    /// Create a scanner that reports every produced token to `observer`.
    #[must_use]
    pub fn with_observer(source: &'a str, observer: impl TokenObserver + 'a) -> Self {
        let mut scanner = Self::new(source);
        scanner.set_observer(observer);
        scanner
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Toggle debug mode. While enabled every produced token is emitted as a
    /// `DEBUG` tracing event on target `wrim_scanner`.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    #[must_use]
    pub const fn is_debug(&self) -> bool {
        self.debug
    }

    /// Install `observer`, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl TokenObserver + 'a) {
        self.observer = Some(Box::new(observer));
    }

    /// Remove and return the current observer.
    pub fn clear_observer(&mut self) -> Option<Box<dyn TokenObserver + 'a>> {
        self.observer.take()
    }

    #[must_use]
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    // =========================================================================
    // Cursor state
    // =========================================================================

    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the current character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Byte offset of the next character to read.
    #[must_use]
    pub const fn read_position(&self) -> usize {
        self.read_position
    }

    /// The current character, or `None` at end of input.
    #[must_use]
    pub const fn current_char(&self) -> Option<char> {
        self.ch
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.ch.is_none()
    }

    /// Start offset of the most recently produced token.
    #[must_use]
    pub const fn token_start(&self) -> usize {
        self.token_start
    }

    /// End offset (exclusive) of the most recently produced token.
    #[must_use]
    pub const fn token_end(&self) -> usize {
        self.token_end
    }

    #[must_use]
    pub fn token_span(&self) -> Span {
        Span::from_usize(self.token_start, self.token_end)
    }

    /// Source text of the most recently produced token.
    #[must_use]
    pub fn token_text(&self) -> &'a str {
        &self.source[self.token_start..self.token_end]
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    /// Produce the next token.
    ///
    /// Once the input is exhausted every call returns `EOF` with empty text and
    /// leaves the cursor untouched.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let token = match self.ch {
            None => {
                self.token_start = self.source.len();
                self.token_end = self.source.len();
                let token = Token::eof();
                self.emit(&token);
                return token;
            }
            Some(ch) => {
                if let Some(kind) = char_to_punctuation(ch) {
                    self.read_char();
                    Token::new(kind, self.slice_from(start))
                } else if is_letter(ch) {
                    let text = self.read_identifier();
                    Token::new(lookup_ident(text), text)
                } else if is_digit(ch) {
                    Token::new(TokenKind::Int, self.read_number())
                } else {
                    self.read_char();
                    Token::new(TokenKind::Illegal, self.slice_from(start))
                }
            }
        };

        self.token_start = start;
        self.token_end = self.position;
        self.emit(&token);
        token
    }

    /// Scan the remaining input. The result always ends with exactly one `EOF`.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        tokens
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Advance one character.
    fn read_char(&mut self) {
        self.ch = self
            .source
            .get(self.read_position..)
            .and_then(|rest| rest.chars().next());
        self.position = self.read_position;
        self.read_position += self.ch.map_or(1, char::len_utf8);
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(is_whitespace) {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> &'a str {
        let start = self.position;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        self.slice_from(start)
    }

    fn read_number(&mut self) -> &'a str {
        let start = self.position;
        while self.ch.is_some_and(is_digit) {
            self.read_char();
        }
        self.slice_from(start)
    }

    /// Source text from `start` up to the current character.
    fn slice_from(&self, start: usize) -> &'a str {
        let end = self.position.min(self.source.len());
        &self.source[start..end]
    }

    fn emit(&mut self, token: &Token) {
        if self.debug {
            debug!(
                target: "wrim_scanner",
                kind = token.kind.as_str(),
                text = token.text.as_str(),
                "token"
            );
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.on_token(token);
        }
    }
}

impl fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("position", &self.position)
            .field("read_position", &self.read_position)
            .field("ch", &self.ch)
            .field("debug", &self.debug)
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

/// Yields every token up to and including the first `EOF`, then stops.
impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.iter_done {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.iter_done = true;
        }
        Some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

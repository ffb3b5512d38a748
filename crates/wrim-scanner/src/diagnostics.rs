//! Illegal-character reporting for drivers.

use wrim_common::diagnostics::{Diagnostic, diagnostic_messages};

use crate::scanner_impl::Scanner;
use crate::token::Token;

/// Scan all of `source` and pair the token stream with one diagnostic per
/// `ILLEGAL` token.
///
/// The token stream is identical to what [`Scanner::scan_tokens`] returns.
#[must_use]
pub fn collect_diagnostics(file_name: &str, source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    loop {
        let token = scanner.next_token();
        if token.is_illegal() {
            diagnostics.push(Diagnostic::from_message(
                file_name,
                scanner.token_span(),
                &diagnostic_messages::INVALID_CHARACTER,
            ));
        }
        let is_eof = token.is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }

    (tokens, diagnostics)
}

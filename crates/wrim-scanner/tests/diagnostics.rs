use wrim_common::DiagnosticCategory;
use wrim_common::diagnostics::diagnostic_messages;
use wrim_scanner::{Scanner, TokenKind, collect_diagnostics};

#[test]
fn one_diagnostic_per_illegal_character() {
    let source = "let x = @ + é;";
    let (tokens, diagnostics) = collect_diagnostics("main.wrim", source);

    assert_eq!(tokens, Scanner::new(source).scan_tokens());
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Illegal).count(),
        2
    );
    assert_eq!(diagnostics.len(), 2);

    let at = &diagnostics[0];
    assert_eq!(at.file, "main.wrim");
    assert_eq!(at.code, diagnostic_messages::INVALID_CHARACTER.code);
    assert_eq!(at.category, DiagnosticCategory::Error);
    assert_eq!(at.message_text, "Invalid character.");
    assert_eq!((at.start, at.length), (8, 1));

    let accented = &diagnostics[1];
    assert_eq!((accented.start, accented.length), (12, 2));
    assert_eq!(accented.span().slice(source), Some("é"));
}

#[test]
fn clean_input_has_no_diagnostics() {
    let (tokens, diagnostics) = collect_diagnostics("ok.wrim", "let a = 1;");
    assert!(diagnostics.is_empty());
    assert!(tokens.last().is_some_and(|t| t.is_eof()));
}

#[test]
fn empty_input_has_no_diagnostics() {
    let (tokens, diagnostics) = collect_diagnostics("empty.wrim", "");
    assert_eq!(tokens.len(), 1);
    assert!(diagnostics.is_empty());
}

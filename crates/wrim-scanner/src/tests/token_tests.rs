//! Tests for token.rs

use crate::token::*;

#[test]
fn test_text_to_keyword() {
    assert_eq!(text_to_keyword("function"), Some(TokenKind::Function));
    assert_eq!(text_to_keyword("let"), Some(TokenKind::Let));
    // Not a keyword
    assert_eq!(text_to_keyword("fn"), None);
    assert_eq!(text_to_keyword("le"), None);
    assert_eq!(text_to_keyword("lets"), None);
    assert_eq!(text_to_keyword("LET"), None); // Case sensitive
}

#[test]
fn test_lookup_ident() {
    assert_eq!(lookup_ident("let"), TokenKind::Let);
    assert_eq!(lookup_ident("function"), TokenKind::Function);
    assert_eq!(lookup_ident("foo"), TokenKind::Ident);
    assert_eq!(lookup_ident("Function"), TokenKind::Ident);
}

#[test]
fn test_keyword_to_text() {
    assert_eq!(keyword_to_text(TokenKind::Let), Some("let"));
    assert_eq!(keyword_to_text(TokenKind::Function), Some("function"));
    assert_eq!(keyword_to_text(TokenKind::Ident), None);
    assert_eq!(keyword_to_text(TokenKind::Assign), None);
}

#[test]
fn test_every_keyword_kind_has_a_spelling() {
    for kind in TokenKind::ALL {
        assert_eq!(token_is_keyword(kind), keyword_to_text(kind).is_some(), "{kind:?}");
    }
}

#[test]
fn test_char_to_punctuation() {
    let expected = [
        ('=', TokenKind::Assign),
        ('+', TokenKind::Plus),
        ('(', TokenKind::LParen),
        (')', TokenKind::RParen),
        ('{', TokenKind::LBrace),
        ('}', TokenKind::RBrace),
        (',', TokenKind::Comma),
        (';', TokenKind::Semicolon),
    ];
    for (ch, kind) in expected {
        assert_eq!(char_to_punctuation(ch), Some(kind));
        assert_eq!(punctuation_to_text(kind), Some(ch.to_string().as_str()));
    }
    assert_eq!(char_to_punctuation('-'), None);
    assert_eq!(char_to_punctuation('@'), None);
}

#[test]
fn test_punctuation_to_text_rejects_other_kinds() {
    assert_eq!(punctuation_to_text(TokenKind::Ident), None);
    assert_eq!(punctuation_to_text(TokenKind::Eof), None);
    assert_eq!(punctuation_to_text(TokenKind::Let), None);
}

#[test]
fn test_token_predicates() {
    assert!(token_is_keyword(TokenKind::Let));
    assert!(!token_is_keyword(TokenKind::Ident));
    assert!(token_is_punctuation(TokenKind::LBrace));
    assert!(!token_is_punctuation(TokenKind::Illegal));
    assert!(token_is_literal(TokenKind::Int));
    assert!(!token_is_literal(TokenKind::Ident));
}

#[test]
fn test_token_kind_names() {
    assert_eq!(TokenKind::Illegal.as_str(), "ILLEGAL");
    assert_eq!(TokenKind::Eof.as_str(), "EOF");
    assert_eq!(TokenKind::Ident.as_str(), "IDENT");
    assert_eq!(TokenKind::Int.as_str(), "INT");
    assert_eq!(TokenKind::Function.as_str(), "FUNCTION");
    assert_eq!(TokenKind::Let.to_string(), "LET");
    assert_eq!(TokenKind::Semicolon.to_string(), ";");
}

#[test]
fn test_token_display() {
    assert_eq!(Token::new(TokenKind::Let, "let").to_string(), "LET(\"let\")");
    assert_eq!(Token::eof().to_string(), "EOF(\"\")");
}

#[test]
fn test_token_eof() {
    let eof = Token::eof();
    assert!(eof.is_eof());
    assert!(eof.text.is_empty());
    assert!(!Token::new(TokenKind::Illegal, "@").is_eof());
    assert!(Token::new(TokenKind::Illegal, "@").is_illegal());
}

#[test]
fn test_token_serde() {
    let token = Token::new(TokenKind::LParen, "(");
    let json = serde_json::to_string(&token).expect("token serializes");
    assert_eq!(json, r#"{"kind":"LPAREN","text":"("}"#);

    let back: Token = serde_json::from_str(r#"{"kind":"LET","text":"let"}"#)
        .expect("token deserializes");
    assert_eq!(back, Token::new(TokenKind::Let, "let"));
}

//! Tests for tracing_config.rs

use crate::tracing_config::{DEFAULT_DIRECTIVES, LogFormat, wrim_log_directives};

#[test]
fn test_log_format_parse() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::parse(" text "), LogFormat::Text);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
}

#[test]
fn test_log_format_default_is_text() {
    assert_eq!(LogFormat::default(), LogFormat::Text);
}

#[test]
fn test_empty_wrim_log_selects_scanner_events() {
    assert_eq!(wrim_log_directives(""), DEFAULT_DIRECTIVES);
    assert_eq!(wrim_log_directives("   "), "wrim_scanner=debug");
}

#[test]
fn test_explicit_wrim_log_is_kept() {
    assert_eq!(wrim_log_directives("trace"), "trace");
    assert_eq!(
        wrim_log_directives(" wrim_scanner=trace,warn "),
        "wrim_scanner=trace,warn"
    );
}

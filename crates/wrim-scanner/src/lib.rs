//! Wrim scanner/tokenizer.
//!
//! This crate provides the lexical analysis phase:
//! - `TokenKind` / `Token` - Token types and the keyword table
//! - `Scanner` - Pull-based tokenizer over a borrowed source text
//! - `char_codes` - Character classification utilities
//! - `TokenObserver` - Hooks invoked once per produced token

pub mod char_codes;
#[cfg(test)]
#[path = "tests/char_codes_tests.rs"]
mod char_codes_tests;

pub mod token;
pub use token::*;
#[cfg(test)]
#[path = "tests/token_tests.rs"]
mod token_tests;

pub mod scanner_impl;
pub use scanner_impl::Scanner;
#[cfg(test)]
#[path = "tests/scanner_impl_tests.rs"]
mod scanner_impl_tests;

pub mod observer;
pub use observer::{TokenObserver, TokenRecorder, TracingObserver};
#[cfg(test)]
#[path = "tests/observer_tests.rs"]
mod observer_tests;

pub mod diagnostics;
pub use diagnostics::collect_diagnostics;

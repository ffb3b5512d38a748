//! Diagnostic types.
//!
//! The scanner never fails; problems in the input are reported in-band as
//! tokens. Drivers that want to surface those problems to a user turn them
//! into the `Diagnostic` values defined here.

use serde::Serialize;

use crate::span::Span;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
}

/// A message table entry: code, category and fixed text.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// A located report about one region of a source file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Report `message` at `span` in `file`.
    #[must_use]
    pub fn from_message(file: impl Into<String>, span: Span, message: &DiagnosticMessage) -> Self {
        Self {
            file: file.into(),
            start: span.start,
            length: span.len(),
            message_text: message.message.to_string(),
            category: message.category,
            code: message.code,
        }
    }

    /// The source span this diagnostic points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.start.saturating_add(self.length))
    }
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage};

    /// A character outside every token class.
    pub const INVALID_CHARACTER: DiagnosticMessage = DiagnosticMessage {
        code: 1127,
        category: DiagnosticCategory::Error,
        message: "Invalid character.",
    };
}

//! Common types and utilities for the Wrim toolchain.
//!
//! This crate provides foundational types used across all wrim crates:
//! - Source spans (`Span`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message table)
//! - Tracing subscriber setup driven by `WRIM_LOG` / `WRIM_LOG_FORMAT`

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;
#[cfg(test)]
#[path = "tests/span_tests.rs"]
mod span_tests;

// Diagnostics - in-band problem reports handed to drivers
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage};
#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;

// Tracing configuration for debugging token streams
pub mod tracing_config;
#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;

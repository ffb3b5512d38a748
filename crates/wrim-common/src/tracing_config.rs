//! Tracing configuration for inspecting token streams.
//!
//! Supports three output formats controlled by `WRIM_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Every token the scanner produces (debug mode must be enabled on the scanner).
//! # An empty WRIM_LOG means the same thing.
//! WRIM_LOG=wrim_scanner=debug my-driver file.wrim
//! WRIM_LOG= my-driver file.wrim
//!
//! # JSON (for tooling)
//! WRIM_LOG=debug WRIM_LOG_FORMAT=json my-driver file.wrim
//! ```
//!
//! The subscriber is only initialised when `WRIM_LOG` (or `RUST_LOG`) is set,
//! so there is zero overhead in normal builds.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "WRIM_LOG";
/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "WRIM_LOG_FORMAT";
/// Directives used when `WRIM_LOG` is set but empty: the scanner's per-token
/// debug events and nothing else.
pub const DEFAULT_DIRECTIVES: &str = "wrim_scanner=debug";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    #[default]
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name. Unknown names fall back to `Text`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Parse from the `WRIM_LOG_FORMAT` environment variable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default())
    }
}

/// Filter directives for a `WRIM_LOG` value.
pub(crate) fn wrim_log_directives(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        DEFAULT_DIRECTIVES
    } else {
        value
    }
}

/// Build an `EnvFilter` from `WRIM_LOG`, falling back to `RUST_LOG`.
///
/// `WRIM_LOG` takes precedence when both are set.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_ENV) {
        EnvFilter::builder().parse_lossy(wrim_log_directives(&val))
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `WRIM_LOG` nor `RUST_LOG` is set. Returns `true`
/// only when this call installed a subscriber; a subscriber installed earlier
/// by someone else is left in place.
///
/// All output goes to stderr so it never interferes with a driver's stdout.
pub fn init_tracing() -> bool {
    let has_wrim_log = std::env::var(LOG_ENV).is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_wrim_log && !has_rust_log {
        return false;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default().with_targets(true);

            Registry::default()
                .with(filter)
                .with(tree_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default()
                .with(filter)
                .with(json_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

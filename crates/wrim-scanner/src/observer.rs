//! Hooks invoked once for every token a scanner produces.
//!
//! Observers see each token after it has been built and before it is returned
//! to the caller. They cannot change it.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{Level, debug, error, info, trace, warn};

use crate::token::Token;

/// Receives every token produced by a [`Scanner`](crate::Scanner).
pub trait TokenObserver {
    fn on_token(&mut self, token: &Token);
}

impl<F> TokenObserver for F
where
    F: FnMut(&Token),
{
    fn on_token(&mut self, token: &Token) {
        self(token);
    }
}

/// Collects a copy of every observed token.
///
/// Clones share the same buffer, so one handle can be given to a scanner while
/// another is kept to read the recording back.
#[derive(Clone, Debug, Default)]
pub struct TokenRecorder {
    tokens: Arc<Mutex<Vec<Token>>>,
}

impl TokenRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the tokens recorded so far.
    #[must_use]
    pub fn tokens(&self) -> Vec<Token> {
        self.tokens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.tokens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl TokenObserver for TokenRecorder {
    fn on_token(&mut self, token: &Token) {
        self.tokens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(token.clone());
    }
}

/// Emits each token as a `tracing` event at a fixed level.
#[derive(Clone, Copy, Debug)]
pub struct TracingObserver {
    level: Level,
}

impl TracingObserver {
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl TokenObserver for TracingObserver {
    fn on_token(&mut self, token: &Token) {
        // Callsite levels are static, so dispatch to the matching macro.
        let kind = token.kind.as_str();
        let text = token.text.as_str();
        if self.level == Level::TRACE {
            trace!(target: "wrim_scanner", kind, text, "token");
        } else if self.level == Level::DEBUG {
            debug!(target: "wrim_scanner", kind, text, "token");
        } else if self.level == Level::INFO {
            info!(target: "wrim_scanner", kind, text, "token");
        } else if self.level == Level::WARN {
            warn!(target: "wrim_scanner", kind, text, "token");
        } else {
            error!(target: "wrim_scanner", kind, text, "token");
        }
    }
}

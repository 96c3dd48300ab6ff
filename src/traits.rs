//! Diagnostic sink abstraction
//!
//! Normalization reports recoverable input problems as warnings rather
//! than errors. The sink is injected at construction time, so embedders
//! can reroute diagnostics and tests can observe them without capturing
//! stderr.

use crate::ui;
use std::sync::{Arc, Mutex};

/// Receiver for warn-level diagnostics emitted during normalization.
///
/// The normalizer only ever takes `&self`, so implementations that
/// accumulate state need interior mutability.
pub trait DiagnosticSink: Send + Sync {
    /// Record one human-readable warning message.
    fn warn(&self, message: &str);
}

/// Default sink: writes warnings to stderr via `ui::warning`.
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn warn(&self, message: &str) {
        ui::warning(message);
    }
}

/// Sink that collects messages in memory.
///
/// Cloning yields a handle to the same buffer, so a test can keep one
/// handle and hand the other to the normalizer.
#[derive(Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages recorded so far, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        // Record the message (ignore lock poisoning)
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

//! Warning formatting and the diagnostics sink boundary.
//!
//! Every recoverable failure in the engine produces one single-line,
//! human-readable warning. Warnings cross the sink boundary as plain text;
//! no structured codes are exposed, and a sink is free to log, buffer, or
//! discard them.

use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Receives one formatted line per rejected or degraded call.
pub trait DiagnosticsSink: Send + Sync {
    fn warn(&self, message: &str);
}

// Lets a caller keep a handle on a sink it hands to the engine.
impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for std::sync::Arc<S> {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

/// The reasons the engine degrades a call. Rendered through `Display` into
/// the line handed to the sink, prefixed with the originating operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum Warning {
    #[error(
        "set_language(pack): language pack rejected; \
         neither a templates nor a functions section is present"
    )]
    PackRejected,

    #[error("text(id, params): returning empty string because the id is empty")]
    EmptyId,

    #[error("text({id:?}, params): returning empty string because the id is not in the pack")]
    UnknownId { id: String },

    #[error(
        "text({id:?}, params): returning empty string because \
         the computed template produced no string"
    )]
    NoComputedValue { id: String },

    #[error("text({id:?}, params): parameters missing in template: {names}")]
    MissingParameters { id: String, names: String },
}

/// Default sink: forwards warnings to [`tracing::warn!`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "phrasebook", "{message}");
    }
}

/// Discards all warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn warn(&self, _message: &str) {}
}

/// Accumulates warnings in memory, for tests and for callers that route
/// diagnostics elsewhere in batches.
#[derive(Debug, Default)]
pub struct BufferSink {
    messages: Mutex<Vec<String>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the accumulated warnings, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Removes and returns the accumulated warnings.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    // A poisoned buffer still holds valid strings; keep collecting.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticsSink for BufferSink {
    fn warn(&self, message: &str) {
        self.lock().push(message.to_owned());
    }
}

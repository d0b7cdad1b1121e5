//! Diagnostics for the non-fatal paths of a conversion
//!
//! The converters never fail. When they meet something they do not understand (a node kind
//! without an encoder, a value the normalizer cannot classify) they fall back and report a
//! [`Diagnostic`] to the configured [`DiagnosticSink`]. The default sink forwards to `tracing`.

use serde_json::Value;
use std::fmt;
use std::sync::{Arc, Mutex};

/// A non-fatal event raised during conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// No encoder is registered for this node kind; the generic encoder was used.
    UnknownNodeKind { context: String, node_name: String },
    /// The normalizer received a value it could not classify and passed it through.
    UnknownShape { value: Value },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownNodeKind { context, node_name } => {
                write!(f, "Unprocessed node: {context}:{node_name}")
            }
            Diagnostic::UnknownShape { value } => write!(f, "Unknown node: {value}"),
        }
    }
}

/// Receiver for conversion diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Logs every diagnostic as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnknownNodeKind { context, node_name } => {
                tracing::warn!(%context, %node_name, "unprocessed node, using generic encoder");
            }
            Diagnostic::UnknownShape { value } => {
                tracing::warn!(%value, "unknown node shape, passed through unchanged");
            }
        }
    }
}

/// Records diagnostics in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    records: Arc<Mutex<Vec<Diagnostic>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push(diagnostic.clone());
    }
}

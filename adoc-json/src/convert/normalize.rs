//! Result normalization
//!
//! Turns any [`Converted`] value into the canonical child sequence of an Mdast node:
//!
//! - a record with a string `type` is kept as is, except that `block` wrappers are replaced by
//!   their own children when flattening is enabled
//! - bare text becomes a `{"type": "text", "value": ...}` leaf
//! - sequences are normalized element by element and spliced into the parent sequence
//! - anything else (records without `type`, scalars) is reported and passed through unchanged
//!
//! Normalizing an already canonical sequence returns it unchanged.

use super::{Converted, Record};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use serde_json::Value;

/// Discriminant of the synthetic wrapper blocks that flattening removes.
pub const WRAPPER_TYPE: &str = "block";

pub struct Normalizer<'a> {
    flat: bool,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Normalizer<'a> {
    pub fn new(flat: bool, sink: &'a dyn DiagnosticSink) -> Self {
        Normalizer { flat, sink }
    }

    /// Normalize a top-level value into a sequence of nodes.
    pub fn normalize(&self, converted: Converted) -> Vec<Value> {
        let mut out = Vec::new();
        self.push_child(converted, &mut out);
        out
    }

    /// Convenience wrapper for values that are already JSON.
    pub fn normalize_value(&self, value: Value) -> Vec<Value> {
        self.normalize(Converted::from_value(value))
    }

    fn push_child(&self, converted: Converted, out: &mut Vec<Value>) {
        match converted {
            Converted::Node(record) => self.push_record(record, out),
            Converted::Leaf(text) => out.push(text_node(text)),
            Converted::Sequence(items) => {
                for item in items {
                    self.push_child(item, out);
                }
            }
            Converted::Other(value) => self.pass_through(value, out),
        }
    }

    fn push_record(&self, mut record: Record, out: &mut Vec<Value>) {
        let is_wrapper = record
            .get("type")
            .and_then(Value::as_str)
            .map(|kind| kind == WRAPPER_TYPE);

        match is_wrapper {
            None => self.pass_through(Value::Object(record), out),
            Some(true) if self.flat => {
                let children = record
                    .remove("children")
                    .unwrap_or(Value::Array(Vec::new()));
                self.push_child(Converted::from_value(children), out);
            }
            Some(_) => out.push(Value::Object(record)),
        }
    }

    fn pass_through(&self, value: Value, out: &mut Vec<Value>) {
        self.sink.report(&Diagnostic::UnknownShape {
            value: value.clone(),
        });
        out.push(value);
    }
}

/// An Mdast text leaf.
pub fn text_node(value: impl Into<String>) -> Value {
    let mut record = Record::new();
    record.insert("type".to_string(), Value::String("text".to_string()));
    record.insert("value".to_string(), Value::String(value.into()));
    Value::Object(record)
}

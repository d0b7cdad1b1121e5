//! Shared conversion machinery
//!
//!     Both backends produce the same three kinds of intermediate result: bare text, a single
//!     record, or a sequence of either. [`Converted`] names those shapes so that the normalizer can
//!     match on them exhaustively. The helpers here are schema agnostic; anything that knows about
//!     field names lives in the backends.
//!
//!     - normalize.rs: reconciles [`Converted`] values into a canonical child sequence
//!     - position.rs:  maps a source location to a unist-style position record

pub mod normalize;
pub mod position;

pub use normalize::Normalizer;
pub use position::{source_position, Point, Position};

use crate::source::{Inline, SourceNode};
use serde::Serialize;
use serde_json::{Map, Value};

/// A JSON object under construction.
pub type Record = Map<String, Value>;

/// Result of converting a node or decoding inline content.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    Leaf(String),
    Node(Record),
    Sequence(Vec<Converted>),
    /// A value that is none of the above (numbers, booleans, null).
    Other(Value),
}

impl Converted {
    /// Classify an arbitrary JSON value.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => Converted::Leaf(text),
            Value::Object(record) => Converted::Node(record),
            Value::Array(items) => {
                Converted::Sequence(items.into_iter().map(Converted::from_value).collect())
            }
            other => Converted::Other(other),
        }
    }

    /// The raw JSON form, without any normalization.
    pub fn into_value(self) -> Value {
        match self {
            Converted::Leaf(text) => Value::String(text),
            Converted::Node(record) => Value::Object(record),
            Converted::Sequence(items) => {
                Value::Array(items.into_iter().map(Converted::into_value).collect())
            }
            Converted::Other(value) => value,
        }
    }

    /// Assemble decoded parts. Adjacent text is merged and a single part stands on its own.
    pub fn from_parts(parts: Vec<Converted>) -> Self {
        let mut merged: Vec<Converted> = Vec::with_capacity(parts.len());
        for part in parts {
            match (merged.last_mut(), part) {
                (Some(Converted::Leaf(prev)), Converted::Leaf(text)) => prev.push_str(&text),
                (_, part) => merged.push(part),
            }
        }
        if merged.len() == 1 {
            merged.pop().unwrap_or(Converted::Sequence(Vec::new()))
        } else {
            Converted::Sequence(merged)
        }
    }

    /// Concatenated text of the leaves, descending into `children` and `value` fields.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        push_text(&self.clone().into_value(), &mut out);
        out
    }
}

fn push_text(value: &Value, out: &mut String) {
    match value {
        Value::String(text) => out.push_str(text),
        Value::Array(items) => items.iter().for_each(|item| push_text(item, out)),
        Value::Object(record) => {
            if let Some(inner) = record.get("value").or_else(|| record.get("children")) {
                push_text(inner, out);
            }
        }
        _ => {}
    }
}

/// Decode inline segments, dispatching embedded nodes through `convert`.
///
/// An empty segment list decodes to an empty sequence.
pub fn decode_inlines<F>(segments: &[Inline<'_>], mut convert: F) -> Converted
where
    F: FnMut(&dyn SourceNode) -> Converted,
{
    let parts = segments
        .iter()
        .map(|segment| match segment {
            Inline::Text(text) => Converted::Leaf((*text).to_string()),
            Inline::Node(node) => convert(*node),
        })
        .collect();
    Converted::from_parts(parts)
}

/// Attributes copied off a source node during an Mdast conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeRecord {
    /// Pre-order position of the node among the nodes that recorded data.
    pub ordinal: usize,
    pub node_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub attributes: Record,
}

/// Output of a backend: the converted tree plus the attribute side channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub tree: Value,
    pub data: Vec<AttributeRecord>,
}

impl Conversion {
    pub fn new(tree: Value) -> Self {
        Conversion {
            tree,
            data: Vec::new(),
        }
    }
}

//! Plain JSON backend
//!
//! Dumps the source tree using the processor's own vocabulary. Nothing is normalized: inline
//! content is emitted as decoded, which is a string for plain text, an object for a single
//! inline node and an array when text and nodes are mixed.
//!
//! | Source node                     | Output fields                                               |
//! |---------------------------------|-------------------------------------------------------------|
//! | document, preamble, section     | name, context, attributes, title?, blocks or content, ...   |
//! | paragraph                       | name, context, attributes, text                             |
//! | ulist                           | name, context, items[{text, blocks}]                        |
//! | inline_quoted                   | name, context, type?, target?, text                         |
//! | anything else, anchors, images  | same as document, reported as unprocessed                   |

use crate::backend::Backend;
use crate::convert::{decode_inlines, Conversion, Converted, Record};
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::source::{non_empty, plain_text, Inline, NodeKind, SourceNode};
use serde_json::Value;
use std::sync::Arc;

/// Backend implementation for the plain JSON dump
pub struct JsonBackend {
    sink: Arc<dyn DiagnosticSink>,
}

impl JsonBackend {
    pub fn new() -> Self {
        JsonBackend {
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }
}

impl Default for JsonBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for JsonBackend {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Plain JSON dump of the AsciiDoc tree"
    }

    fn convert(&self, node: &dyn SourceNode) -> Conversion {
        let _span =
            tracing::debug_span!("convert", backend = "json", root = node.node_name()).entered();
        Conversion::new(convert_node(node, self.sink.as_ref()).into_value())
    }
}

fn convert_node(node: &dyn SourceNode, sink: &dyn DiagnosticSink) -> Converted {
    let record = match NodeKind::of(node) {
        NodeKind::Document | NodeKind::Preamble | NodeKind::Section => object_node(node, sink),
        NodeKind::Paragraph => paragraph(node, sink),
        NodeKind::UnorderedList => list(node, sink),
        NodeKind::InlineQuoted => inline(node, sink),
        // Anchors and images have no dedicated shape in this schema either.
        NodeKind::InlineAnchor | NodeKind::InlineImage | NodeKind::Image | NodeKind::Other => {
            sink.report(&Diagnostic::UnknownNodeKind {
                context: node.context().to_string(),
                node_name: node.node_name().to_string(),
            });
            object_node(node, sink)
        }
    };
    Converted::Node(record)
}

fn decode(segments: Option<Vec<Inline<'_>>>, sink: &dyn DiagnosticSink) -> Value {
    let segments = segments.unwrap_or_default();
    decode_inlines(&segments, |inner| convert_node(inner, sink)).into_value()
}

fn header(node: &dyn SourceNode) -> Record {
    let mut r = Record::new();
    r.insert("name".to_string(), Value::from(node.node_name()));
    r.insert("context".to_string(), Value::from(node.context()));
    r
}

fn attributes(node: &dyn SourceNode) -> Value {
    Value::Object(node.attributes().cloned().unwrap_or_default())
}

fn object_node(node: &dyn SourceNode, sink: &dyn DiagnosticSink) -> Record {
    let mut r = header(node);
    r.insert("attributes".to_string(), attributes(node));

    if let Some(title) = node.title() {
        let title = plain_text(&title);
        if !title.is_empty() {
            r.insert("title".to_string(), Value::String(title));
        }
    }
    if let Some(blocks) = node.blocks() {
        let blocks = blocks
            .into_iter()
            .map(|block| convert_node(block, sink).into_value())
            .collect();
        r.insert("blocks".to_string(), Value::Array(blocks));
    } else if let Some(content) = node.content() {
        r.insert("content".to_string(), decode(Some(content), sink));
    }

    for (key, value) in [
        ("alt", node.alt()),
        ("target", node.target()),
        ("type", node.sub_type()),
        ("id", node.id()),
        ("role", node.role()),
        ("reftext", node.reftext()),
    ] {
        if let Some(value) = non_empty(value) {
            r.insert(key.to_string(), Value::from(value));
        }
    }
    if let Some(level) = node.level().filter(|level| *level != 0) {
        r.insert("level".to_string(), Value::from(level));
    }
    r
}

fn paragraph(node: &dyn SourceNode, sink: &dyn DiagnosticSink) -> Record {
    let mut r = header(node);
    r.insert("attributes".to_string(), attributes(node));
    r.insert("text".to_string(), decode(node.content(), sink));
    r
}

fn inline(node: &dyn SourceNode, sink: &dyn DiagnosticSink) -> Record {
    let mut r = header(node);
    if let Some(kind) = node.sub_type() {
        r.insert("type".to_string(), Value::from(kind));
    }
    if let Some(target) = node.target() {
        r.insert("target".to_string(), Value::from(target));
    }
    r.insert("text".to_string(), decode(node.text(), sink));
    r
}

fn list(node: &dyn SourceNode, sink: &dyn DiagnosticSink) -> Record {
    let items = node
        .items()
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            let blocks = item
                .blocks()
                .unwrap_or_default()
                .into_iter()
                .map(|block| convert_node(block, sink).into_value())
                .collect();
            let mut entry = Record::new();
            entry.insert("text".to_string(), decode(item.text(), sink));
            entry.insert("blocks".to_string(), Value::Array(blocks));
            Value::Object(entry)
        })
        .collect();

    let mut r = header(node);
    r.insert("items".to_string(), Value::Array(items));
    r
}

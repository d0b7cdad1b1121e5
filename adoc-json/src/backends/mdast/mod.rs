//! Mdast backend
//!
//! Produces a tree that Markdown AST tooling can consume directly.
//!
//! # Node Mapping Table
//!
//! | Source node     | Mdast output                          | Notes                                     |
//! |-----------------|---------------------------------------|-------------------------------------------|
//! | document        | `root`                                | generic encoder                           |
//! | preamble        | `block`                               | generic encoder, removed by `flat`        |
//! | section         | `block` [`heading`, ...body]          | heading depth = level + 1                 |
//! | paragraph       | `paragraph`                           | children from content                     |
//! | ulist           | `list` with `items`                   | every item has `text` and `blocks`        |
//! | inline_quoted   | `strong` / `emphasis` / `inlineCode`  | other sub-types become `inline:<type>`    |
//! | inline_anchor   | `link`                                | `title` is null without alt text          |
//! | inline_image    | `image`                               | alt and target read directly              |
//! | image           | `image`                               | target read from the `target` attribute   |
//! | anything else   | `unknown:<nodeName>`                  | generic encoder, reported as a diagnostic |
//!
//! # Lossy Conversions
//!
//! - Positions only carry a start line; end equals start and the column is always 0.
//! - An empty title, alt or target is indistinguishable from a missing one.
//! - Attributes are not part of the tree; they are returned next to it in
//!   [`Conversion::data`](crate::convert::Conversion).

mod encoders;

use crate::backend::Backend;
use crate::convert::{decode_inlines, AttributeRecord, Conversion, Converted, Normalizer};
use crate::convert::normalize::WRAPPER_TYPE;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::options::ConverterOptions;
use crate::source::{Inline, NodeKind, SourceNode};
use serde_json::Value;
use std::sync::Arc;

/// Backend implementation for the Mdast schema
pub struct MdastBackend {
    options: ConverterOptions,
    sink: Arc<dyn DiagnosticSink>,
}

impl MdastBackend {
    pub fn new(options: ConverterOptions) -> Self {
        MdastBackend {
            options,
            sink: Arc::new(TracingSink),
        }
    }

    /// Route diagnostics somewhere other than `tracing`.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn options(&self) -> ConverterOptions {
        self.options
    }
}

impl Default for MdastBackend {
    fn default() -> Self {
        Self::new(ConverterOptions::default())
    }
}

impl Backend for MdastBackend {
    fn name(&self) -> &str {
        "mdast"
    }

    fn description(&self) -> &str {
        "Markdown AST (mdast) compatible JSON tree"
    }

    fn convert(&self, node: &dyn SourceNode) -> Conversion {
        let _span = tracing::debug_span!(
            "convert",
            backend = "mdast",
            flat = self.options.flat,
            root = node.node_name()
        )
        .entered();

        let mut converter = Converter::new(self.options, self.sink.as_ref());
        let tree = converter.convert(node).into_value();
        tracing::debug!(attribute_records = converter.data.len(), "mdast conversion finished");

        Conversion {
            tree,
            data: converter.data,
        }
    }
}

/// State of a single conversion call.
pub(crate) struct Converter<'a> {
    options: ConverterOptions,
    sink: &'a dyn DiagnosticSink,
    data: Vec<AttributeRecord>,
}

impl<'a> Converter<'a> {
    pub(crate) fn new(options: ConverterOptions, sink: &'a dyn DiagnosticSink) -> Self {
        Converter {
            options,
            sink,
            data: Vec::new(),
        }
    }

    /// Dispatch a node to the encoder for its kind.
    pub(crate) fn convert(&mut self, node: &dyn SourceNode) -> Converted {
        tracing::trace!(node_name = node.node_name(), "converting node");
        let record = match NodeKind::of(node) {
            NodeKind::Document => self.object_node(node, "root"),
            NodeKind::Preamble => self.object_node(node, WRAPPER_TYPE),
            NodeKind::Section => self.section(node),
            NodeKind::Paragraph => self.paragraph(node),
            NodeKind::UnorderedList => self.list(node),
            NodeKind::InlineQuoted => self.inline(node),
            NodeKind::InlineAnchor => self.link(node),
            NodeKind::InlineImage | NodeKind::Image => self.image(node),
            NodeKind::Other => {
                self.sink.report(&Diagnostic::UnknownNodeKind {
                    context: node.context().to_string(),
                    node_name: node.node_name().to_string(),
                });
                let kind = format!("unknown:{}", node.node_name());
                self.object_node(node, &kind)
            }
        };
        Converted::Node(record)
    }

    fn normalizer(&self) -> Normalizer<'a> {
        Normalizer::new(self.options.flat, self.sink)
    }

    /// Normalize into a `children` array.
    fn children(&self, converted: Converted) -> Value {
        Value::Array(self.normalizer().normalize(converted))
    }

    fn decode(&mut self, segments: Option<Vec<Inline<'_>>>) -> Converted {
        let segments = segments.unwrap_or_default();
        decode_inlines(&segments, |inner| self.convert(inner))
    }

    fn convert_blocks(&mut self, blocks: Vec<&dyn SourceNode>) -> Converted {
        Converted::Sequence(blocks.into_iter().map(|b| self.convert(b)).collect())
    }
}

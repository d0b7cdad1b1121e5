//! Source node facade
//!
//!     The converters never see a concrete document parser. They consume nodes through the
//!     [`SourceNode`] trait, whose accessors mirror the capabilities an AsciiDoc processor exposes
//!     on its AST. Every accessor except `node_name` and `context` is optional, and an absent
//!     capability is a normal outcome: it means the feature does not apply to that node kind.
//!
//!     Inline-bearing accessors (title, content, text) hand back [`Inline`] segments instead of a
//!     pre-rendered string. A segment is either literal text or an embedded inline node that the
//!     converter has to dispatch on its own.
//!
//!     [`AstNode`] is the serde-backed implementation used by the CLI and the tests.

pub mod ast;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use ast::{AstNode, InlineSegment, RichText};

/// One piece of inline content: literal text or an embedded inline node.
#[derive(Clone, Copy)]
pub enum Inline<'a> {
    Text(&'a str),
    Node(&'a dyn SourceNode),
}

impl std::fmt::Debug for Inline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inline::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Inline::Node(node) => f.debug_tuple("Node").field(&node.node_name()).finish(),
        }
    }
}

/// Where a node was read from.
///
/// A location without a line number is treated as if the node had no location at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Capability-based view of a node in the source document tree.
///
/// Implementors only override the accessors their node kinds support.
pub trait SourceNode {
    /// Fine-grained node kind, e.g. `paragraph` or `inline_quoted`.
    fn node_name(&self) -> &str;

    /// Coarse category, e.g. `block`, `section` or `inline`.
    fn context(&self) -> &str;

    fn title(&self) -> Option<Vec<Inline<'_>>> {
        None
    }

    fn content(&self) -> Option<Vec<Inline<'_>>> {
        None
    }

    fn text(&self) -> Option<Vec<Inline<'_>>> {
        None
    }

    /// Structural children. Takes priority over `content` wherever both exist.
    fn blocks(&self) -> Option<Vec<&dyn SourceNode>> {
        None
    }

    /// Items of a list container.
    fn items(&self) -> Option<Vec<&dyn SourceNode>> {
        None
    }

    fn alt(&self) -> Option<&str> {
        None
    }

    fn target(&self) -> Option<&str> {
        None
    }

    /// The node's `type` sub-field (`strong`, `emphasis`, `monospaced`, `link`, ...).
    fn sub_type(&self) -> Option<&str> {
        None
    }

    fn id(&self) -> Option<&str> {
        None
    }

    fn role(&self) -> Option<&str> {
        None
    }

    fn reftext(&self) -> Option<&str> {
        None
    }

    fn level(&self) -> Option<i64> {
        None
    }

    fn attributes(&self) -> Option<&Map<String, Value>> {
        None
    }

    /// Look up a single attribute by name.
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes().and_then(|attrs| attrs.get(name))
    }

    fn source_location(&self) -> Option<&SourceLocation> {
        None
    }
}

/// Explicit kind tag used for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Preamble,
    Section,
    Paragraph,
    UnorderedList,
    InlineQuoted,
    InlineAnchor,
    InlineImage,
    Image,
    Other,
}

impl NodeKind {
    pub fn from_name(node_name: &str) -> Self {
        match node_name {
            "document" => NodeKind::Document,
            "preamble" => NodeKind::Preamble,
            "section" => NodeKind::Section,
            "paragraph" => NodeKind::Paragraph,
            "ulist" => NodeKind::UnorderedList,
            "inline_quoted" => NodeKind::InlineQuoted,
            "inline_anchor" => NodeKind::InlineAnchor,
            "inline_image" => NodeKind::InlineImage,
            "image" => NodeKind::Image,
            _ => NodeKind::Other,
        }
    }

    pub fn of(node: &dyn SourceNode) -> Self {
        Self::from_name(node.node_name())
    }
}

/// Flatten inline segments into plain text, descending into embedded nodes.
pub fn plain_text(segments: &[Inline<'_>]) -> String {
    let mut out = String::new();
    push_plain_text(segments, &mut out);
    out
}

fn push_plain_text(segments: &[Inline<'_>], out: &mut String) {
    for segment in segments {
        match segment {
            Inline::Text(text) => out.push_str(text),
            Inline::Node(node) => {
                if let Some(inner) = node.text().or_else(|| node.content()) {
                    push_plain_text(&inner, out);
                }
            }
        }
    }
}

/// Returns the string only if it is non-empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

//! Serializable source AST
//!
//! A document tree exported from an AsciiDoc processor as JSON. Keys follow the processor's
//! accessor names (`nodeName`, `context`, `sourceLocation`, ...). Inline-bearing fields accept
//! either a bare string or an array mixing strings and nested inline nodes:
//!
//! ```json
//! {
//!   "nodeName": "paragraph",
//!   "context": "paragraph",
//!   "content": ["Hello, ", {"nodeName": "inline_quoted", "context": "quoted",
//!                           "type": "emphasis", "text": "Asciidoctor"}]
//! }
//! ```

use super::{Inline, SourceLocation, SourceNode};
use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inline-bearing field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    Plain(String),
    Segments(Vec<InlineSegment>),
}

/// Element of a [`RichText::Segments`] array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InlineSegment {
    Text(String),
    Node(AstNode),
}

impl RichText {
    pub fn segments(&self) -> Vec<Inline<'_>> {
        match self {
            RichText::Plain(text) => vec![Inline::Text(text)],
            RichText::Segments(segments) => segments
                .iter()
                .map(|segment| match segment {
                    InlineSegment::Text(text) => Inline::Text(text),
                    InlineSegment::Node(node) => Inline::Node(node),
                })
                .collect(),
        }
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        RichText::Plain(text.to_string())
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        RichText::Plain(text)
    }
}

impl From<Vec<InlineSegment>> for RichText {
    fn from(segments: Vec<InlineSegment>) -> Self {
        RichText::Segments(segments)
    }
}

impl From<&str> for InlineSegment {
    fn from(text: &str) -> Self {
        InlineSegment::Text(text.to_string())
    }
}

impl From<AstNode> for InlineSegment {
    fn from(node: AstNode) -> Self {
        InlineSegment::Node(node)
    }
}

/// A node of the exported source AST.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstNode {
    pub node_name: String,
    #[serde(default)]
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<AstNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<AstNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reftext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<SourceLocation>,
}

impl AstNode {
    pub fn new(node_name: impl Into<String>, context: impl Into<String>) -> Self {
        AstNode {
            node_name: node_name.into(),
            context: context.into(),
            ..Default::default()
        }
    }

    /// Parse an exported tree from its JSON text.
    pub fn from_json(source: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(source).map_err(|e| ConvertError::SourceError(e.to_string()))
    }

    pub fn document(blocks: Vec<AstNode>) -> Self {
        AstNode::new("document", "document").with_blocks(blocks)
    }

    pub fn preamble(blocks: Vec<AstNode>) -> Self {
        AstNode::new("preamble", "preamble").with_blocks(blocks)
    }

    pub fn section(level: i64, title: impl Into<RichText>, blocks: Vec<AstNode>) -> Self {
        let mut node = AstNode::new("section", "section").with_blocks(blocks);
        node.level = Some(level);
        node.title = Some(title.into());
        node
    }

    pub fn paragraph(content: impl Into<RichText>) -> Self {
        let mut node = AstNode::new("paragraph", "paragraph");
        node.content = Some(content.into());
        node
    }

    pub fn ulist(items: Vec<AstNode>) -> Self {
        let mut node = AstNode::new("ulist", "ulist");
        node.items = Some(items);
        node
    }

    pub fn list_item(text: impl Into<RichText>) -> Self {
        let mut node = AstNode::new("list_item", "list_item").with_blocks(Vec::new());
        node.text = Some(text.into());
        node
    }

    pub fn inline_quoted(sub_type: &str, text: impl Into<RichText>) -> Self {
        let mut node = AstNode::new("inline_quoted", "quoted");
        node.sub_type = Some(sub_type.to_string());
        node.text = Some(text.into());
        node
    }

    pub fn anchor(target: &str, text: impl Into<RichText>) -> Self {
        let mut node = AstNode::new("inline_anchor", "anchor");
        node.sub_type = Some("link".to_string());
        node.target = Some(target.to_string());
        node.text = Some(text.into());
        node
    }

    pub fn inline_image(target: &str, alt: Option<&str>) -> Self {
        let mut node = AstNode::new("inline_image", "image");
        node.target = Some(target.to_string());
        node.alt = alt.map(str::to_string);
        node
    }

    /// Block images only expose their target through the `target` attribute.
    pub fn block_image(target: &str, alt: Option<&str>) -> Self {
        let mut node = AstNode::new("image", "image").with_attribute("target", target);
        node.alt = alt.map(str::to_string);
        node
    }

    pub fn with_blocks(mut self, blocks: Vec<AstNode>) -> Self {
        self.blocks = Some(blocks);
        self
    }

    pub fn add_block(&mut self, block: AstNode) {
        self.blocks.get_or_insert_with(Vec::new).push(block);
    }

    pub fn with_title(mut self, title: impl Into<RichText>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }

    pub fn with_location(mut self, line: usize, file: Option<&str>) -> Self {
        self.source_location = Some(SourceLocation {
            line: Some(line),
            file: file.map(str::to_string),
        });
        self
    }
}

impl SourceNode for AstNode {
    fn node_name(&self) -> &str {
        &self.node_name
    }

    fn context(&self) -> &str {
        &self.context
    }

    fn title(&self) -> Option<Vec<Inline<'_>>> {
        self.title.as_ref().map(RichText::segments)
    }

    fn content(&self) -> Option<Vec<Inline<'_>>> {
        self.content.as_ref().map(RichText::segments)
    }

    fn text(&self) -> Option<Vec<Inline<'_>>> {
        self.text.as_ref().map(RichText::segments)
    }

    fn blocks(&self) -> Option<Vec<&dyn SourceNode>> {
        self.blocks
            .as_ref()
            .map(|blocks| blocks.iter().map(|b| b as &dyn SourceNode).collect())
    }

    fn items(&self) -> Option<Vec<&dyn SourceNode>> {
        self.items
            .as_ref()
            .map(|items| items.iter().map(|i| i as &dyn SourceNode).collect())
    }

    fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }

    fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    fn sub_type(&self) -> Option<&str> {
        self.sub_type.as_deref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    fn reftext(&self) -> Option<&str> {
        self.reftext.as_deref()
    }

    fn level(&self) -> Option<i64> {
        self.level
    }

    fn attributes(&self) -> Option<&Map<String, Value>> {
        self.attributes.as_ref()
    }

    fn source_location(&self) -> Option<&SourceLocation> {
        self.source_location.as_ref()
    }
}

//! Shape-specific encoders for the Mdast backend
//!
//! Optional fields follow two different policies and both are intentional:
//! the generic encoder omits any field whose capability is missing or empty, while links and
//! images always carry `title`/`alt`/`url`, set to null when there is nothing to put there.

use super::Converter;
use crate::convert::{source_position, AttributeRecord, Converted, Record};
use crate::source::{non_empty, plain_text, SourceNode};
use serde_json::Value;

impl Converter<'_> {
    /// Generic encoder for documents, preambles and unrecognized kinds.
    pub(super) fn object_node(&mut self, node: &dyn SourceNode, kind: &str) -> Record {
        let mut r = Record::new();
        r.insert("type".to_string(), Value::from(kind));
        self.insert_asciidoc_data(&mut r, node);
        self.record_attributes(node);

        if let Some(blocks) = node.blocks() {
            let converted = self.convert_blocks(blocks);
            r.insert("children".to_string(), self.children(converted));
        } else if let Some(content) = node.content() {
            let decoded = self.decode(Some(content));
            r.insert("children".to_string(), self.children(decoded));
        }

        if let Some(title) = node.title() {
            let title = plain_text(&title);
            if !title.is_empty() {
                r.insert("title".to_string(), Value::String(title));
            }
        }
        insert_non_empty(&mut r, "alt", node.alt());
        insert_non_empty(&mut r, "target", node.target());
        insert_non_empty(&mut r, "asciiDocType", node.sub_type());
        insert_non_empty(&mut r, "id", node.id());
        insert_non_empty(&mut r, "role", node.role());
        insert_non_empty(&mut r, "reftext", node.reftext());
        if let Some(level) = node.level().filter(|level| *level != 0) {
            r.insert("level".to_string(), Value::from(level));
        }

        insert_position(&mut r, node);
        r
    }

    pub(super) fn paragraph(&mut self, node: &dyn SourceNode) -> Record {
        let decoded = self.decode(node.content());
        let mut r = Record::new();
        r.insert("type".to_string(), Value::from("paragraph"));
        r.insert("children".to_string(), self.children(decoded));
        insert_position(&mut r, node);
        r
    }

    /// Quoted inline spans: strong, emphasis, monospaced and the rest.
    pub(super) fn inline(&mut self, node: &dyn SourceNode) -> Record {
        let kind = match node.sub_type() {
            Some(kind @ ("strong" | "emphasis")) => kind.to_string(),
            Some("monospaced") => {
                let value = self.decode(node.text()).text_content();
                let mut r = Record::new();
                r.insert("type".to_string(), Value::from("inlineCode"));
                r.insert("value".to_string(), Value::String(value));
                return r;
            }
            other => format!("inline:{}", other.unwrap_or_default()),
        };

        let decoded = self.decode(node.text());
        let mut r = Record::new();
        r.insert("type".to_string(), Value::String(kind));
        r.insert("children".to_string(), self.children(decoded));
        self.insert_asciidoc_data(&mut r, node);
        r
    }

    pub(super) fn link(&mut self, node: &dyn SourceNode) -> Record {
        let decoded = self.decode(node.text());
        let mut r = Record::new();
        r.insert("type".to_string(), Value::from("link"));
        r.insert("title".to_string(), string_or_null(node.alt()));
        r.insert("url".to_string(), string_or_null(node.target()));
        r.insert("children".to_string(), self.children(decoded));
        r
    }

    /// Inline images expose `target` directly, block images only as an attribute.
    pub(super) fn image(&mut self, node: &dyn SourceNode) -> Record {
        let target = if node.node_name() == "inline_image" {
            node.target()
        } else {
            node.attribute("target").and_then(Value::as_str)
        };

        let mut r = Record::new();
        r.insert("type".to_string(), Value::from("image"));
        r.insert("alt".to_string(), string_or_null(node.alt()));
        r.insert("url".to_string(), string_or_null(target));
        r
    }

    pub(super) fn list(&mut self, node: &dyn SourceNode) -> Record {
        let mut items = Vec::new();
        for item in node.items().unwrap_or_default() {
            let text = match item.text() {
                Some(text) => self.decode(Some(text)).into_value(),
                None => Value::String(String::new()),
            };
            let blocks = item
                .blocks()
                .unwrap_or_default()
                .into_iter()
                .map(|block| self.convert(block).into_value())
                .collect();

            let mut entry = Record::new();
            entry.insert("text".to_string(), text);
            entry.insert("blocks".to_string(), Value::Array(blocks));
            items.push(Value::Object(entry));
        }

        let mut r = Record::new();
        r.insert("type".to_string(), Value::from("list"));
        self.insert_asciidoc_data(&mut r, node);
        r.insert("items".to_string(), Value::Array(items));
        insert_position(&mut r, node);
        r
    }

    /// A `block` holding a synthesized heading followed by the section body.
    pub(super) fn section(&mut self, node: &dyn SourceNode) -> Record {
        let depth = node.level().unwrap_or(0).saturating_add(1);
        let title = self.decode(node.title());

        let mut heading = Record::new();
        heading.insert("type".to_string(), Value::from("heading"));
        heading.insert("depth".to_string(), Value::from(depth));
        heading.insert("children".to_string(), self.children(title));

        let body = self.convert_blocks(node.blocks().unwrap_or_default());
        let mut children = vec![Value::Object(heading)];
        children.extend(self.normalizer().normalize(body));

        let mut r = Record::new();
        r.insert("type".to_string(), Value::from("block"));
        r.insert("children".to_string(), Value::Array(children));
        insert_position(&mut r, node);
        r
    }

    fn insert_asciidoc_data(&self, r: &mut Record, node: &dyn SourceNode) {
        if self.options.no_asciidoc_data {
            return;
        }
        r.insert("name".to_string(), Value::from(node.node_name()));
        r.insert("context".to_string(), Value::from(node.context()));
    }

    /// Copy non-empty attributes into the side channel before descending.
    fn record_attributes(&mut self, node: &dyn SourceNode) {
        let Some(attributes) = node.attributes().filter(|attrs| !attrs.is_empty()) else {
            return;
        };
        self.data.push(AttributeRecord {
            ordinal: self.data.len(),
            node_name: node.node_name().to_string(),
            id: node.id().map(str::to_string),
            attributes: attributes.clone(),
        });
    }
}

fn insert_non_empty(r: &mut Record, key: &str, value: Option<&str>) {
    if let Some(value) = non_empty(value) {
        r.insert(key.to_string(), Value::from(value));
    }
}

fn string_or_null(value: Option<&str>) -> Value {
    non_empty(value).map_or(Value::Null, Value::from)
}

fn insert_position(r: &mut Record, node: &dyn SourceNode) {
    if let Some(Ok(position)) = source_position(node).map(|p| serde_json::to_value(&p)) {
        r.insert("position".to_string(), position);
    }
}

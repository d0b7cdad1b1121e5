//! Property tests over arbitrary source trees.

use crate::common::mdast;
use adoc_json::source::{InlineSegment, RichText};
use adoc_json::{AstNode, Backend, CollectingSink, ConverterOptions, JsonBackend, Normalizer};
use proptest::prelude::*;
use proptest::sample::select;
use serde_json::Value;

const NODE_NAMES: &[&str] = &[
    "document",
    "preamble",
    "section",
    "paragraph",
    "ulist",
    "list_item",
    "inline_quoted",
    "inline_anchor",
    "inline_image",
    "image",
    "admonition",
    "thematic_break",
];

const SUB_TYPES: &[&str] = &["strong", "emphasis", "monospaced", "mark", "link"];

fn leaf() -> impl Strategy<Value = AstNode> {
    (
        select(NODE_NAMES),
        "[a-zA-Z ]{0,12}",
        proptest::option::of(select(SUB_TYPES)),
        proptest::option::of(prop_oneof![0i64..4, any::<i64>()]),
        any::<bool>(),
    )
        .prop_map(|(name, text, sub_type, level, with_text)| {
            let mut node = AstNode::new(name, "block");
            if with_text {
                node.text = Some(RichText::from(text.as_str()));
            } else {
                node.content = Some(RichText::from(text));
            }
            node.sub_type = sub_type.map(str::to_string);
            node.level = level;
            node
        })
}

fn tree() -> impl Strategy<Value = AstNode> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        (
            select(NODE_NAMES),
            prop::collection::vec(inner.clone(), 0..4),
            prop::collection::vec(inner, 0..3),
            proptest::option::of("[a-z]{1,6}"),
        )
            .prop_map(|(name, blocks, inlines, title)| {
                let mut node = AstNode::new(name, "block");
                let mut segments = Vec::new();
                for inline in inlines {
                    segments.push(InlineSegment::from("x "));
                    segments.push(InlineSegment::from(inline));
                }
                node.content = Some(RichText::Segments(segments));
                node.items = Some(blocks.clone());
                node.blocks = Some(blocks);
                node.title = title.map(RichText::from);
                node
            })
    })
}

proptest! {
    #[test]
    fn conversion_is_total(node in tree(), flat in any::<bool>(), quiet in any::<bool>()) {
        let options = ConverterOptions::default().flat(flat).no_asciidoc_data(quiet);
        let (conversion, _) = mdast(&node, options);
        prop_assert!(conversion.tree.is_object());
        prop_assert!(serde_json::to_string(&conversion.tree).is_ok());

        let plain = JsonBackend::new().with_sink(CollectingSink::new()).convert(&node);
        prop_assert!(plain.tree.is_object());
    }

    #[test]
    fn root_children_are_canonical(blocks in prop::collection::vec(tree(), 0..4), flat in any::<bool>()) {
        let doc = AstNode::document(blocks);
        let options = ConverterOptions::default().flat(flat).no_asciidoc_data(true);
        let (conversion, _) = mdast(&doc, options);

        let children = conversion.tree["children"].clone();
        let sink = CollectingSink::new();
        let renormalized = Normalizer::new(flat, &sink).normalize_value(children.clone());

        prop_assert_eq!(Value::Array(renormalized), children.clone());
        prop_assert!(sink.is_empty());
        if flat {
            let wrappers = children
                .as_array()
                .into_iter()
                .flatten()
                .filter(|child| child["type"] == "block")
                .count();
            prop_assert_eq!(wrappers, 0);
        }
    }

    #[test]
    fn attribute_ordinals_are_sequential(blocks in prop::collection::vec(tree(), 0..4)) {
        let mut doc = AstNode::document(blocks).with_attribute("doctype", "article");
        doc.add_block(AstNode::new("sidebar", "sidebar").with_attribute("role", "aside"));
        let (conversion, _) = mdast(&doc, ConverterOptions::default());

        prop_assert!(conversion.data.len() >= 2);
        for (index, record) in conversion.data.iter().enumerate() {
            prop_assert_eq!(record.ordinal, index);
        }
    }
}

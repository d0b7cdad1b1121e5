//! Plain JSON backend tests
//!
//! The plain dump keeps the processor's vocabulary; these mirror the documents the converter
//! was first exercised with (simple text, a titled document, formatted lists).

use crate::common::{load_fixture, pretty};
use adoc_json::source::InlineSegment;
use adoc_json::{AstNode, Backend, BackendRegistry, CollectingSink, JsonBackend};
use insta::assert_snapshot;
use serde_json::json;

fn convert(node: &AstNode) -> serde_json::Value {
    JsonBackend::new().convert(node).tree
}

#[test]
fn test_simple_text() {
    let doc = AstNode::document(vec![AstNode::paragraph("Simple text")])
        .with_attribute("doctype", "article");
    assert_eq!(
        convert(&doc),
        json!({
            "name": "document",
            "context": "document",
            "attributes": {"doctype": "article"},
            "blocks": [{
                "name": "paragraph",
                "context": "paragraph",
                "attributes": {},
                "text": "Simple text"
            }]
        })
    );
}

#[test]
fn test_document_title_only() {
    let doc = AstNode::document(vec![]).with_title("Document title");
    assert_eq!(
        convert(&doc),
        json!({
            "name": "document",
            "context": "document",
            "attributes": {},
            "title": "Document title",
            "blocks": []
        })
    );
}

#[test]
fn test_simple_list_fixture() {
    let tree = convert(&load_fixture("simple-list.json"));
    assert_snapshot!(pretty(&tree["blocks"][0]), @r#"
    {
      "name": "ulist",
      "context": "ulist",
      "items": [
        {
          "text": "Item 1",
          "blocks": []
        },
        {
          "text": "Item 2",
          "blocks": []
        }
      ]
    }
    "#);
}

#[test]
fn test_list_with_nested_formatting() {
    let combined = AstNode::inline_quoted(
        "strong",
        vec![
            InlineSegment::from("bold and "),
            InlineSegment::from(AstNode::inline_quoted("emphasis", "italic")),
        ],
    );
    let item = AstNode::list_item(vec![
        InlineSegment::from("Item with combined "),
        InlineSegment::from(combined),
        InlineSegment::from(" text"),
    ]);

    let tree = convert(&AstNode::ulist(vec![item]));
    assert_eq!(
        tree["items"][0]["text"],
        json!([
            "Item with combined ",
            {
                "name": "inline_quoted",
                "context": "quoted",
                "type": "strong",
                "text": [
                    "bold and ",
                    {"name": "inline_quoted", "context": "quoted", "type": "emphasis", "text": "italic"}
                ]
            },
            " text"
        ])
    );
}

#[test]
fn test_kitchensink_reports_kinds_without_encoder() {
    let sink = CollectingSink::new();
    let backend = JsonBackend::new().with_sink(sink.clone());
    let tree = backend.convert(&load_fixture("kitchensink.json")).tree;

    assert_eq!(tree["title"], json!("Kitchen Sink"));
    assert_eq!(tree["blocks"][1]["level"], json!(1));
    assert_eq!(tree["blocks"][1]["id"], json!("_intro"));

    let reported: Vec<String> = sink.diagnostics().iter().map(|d| d.to_string()).collect();
    assert_eq!(
        reported,
        vec![
            "Unprocessed node: anchor:inline_anchor",
            "Unprocessed node: image:image",
            "Unprocessed node: open:custom_block",
        ]
    );
}

#[test]
fn test_registry_serializes_compact() {
    let registry = BackendRegistry::default();
    let text = registry
        .serialize(&AstNode::paragraph("Hi"), "json", false)
        .unwrap();
    assert_eq!(
        text,
        r#"{"name":"paragraph","context":"paragraph","attributes":{},"text":"Hi"}"#
    );
}

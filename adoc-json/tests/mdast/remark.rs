//! Cases compared against the output of remark for equivalent Markdown.

use crate::common::{mdast, remark_options};
use adoc_json::source::InlineSegment;
use adoc_json::AstNode;
use serde_json::{json, Value};

/// Wrap a single paragraph the way the processor does for a headerless document.
fn document_of(paragraph: AstNode) -> AstNode {
    AstNode::document(vec![paragraph]).with_attribute("doctype", "article")
}

fn convert(doc: &AstNode) -> Value {
    let (conversion, sink) = mdast(doc, remark_options());
    assert!(sink.is_empty(), "unexpected diagnostics: {:?}", sink.diagnostics());
    conversion.tree
}

#[test]
fn test_simple_text() {
    let doc = document_of(AstNode::paragraph("This is a simple paragraph."));
    assert_eq!(
        convert(&doc),
        json!({
            "type": "root",
            "children": [{
                "type": "paragraph",
                "children": [{"type": "text", "value": "This is a simple paragraph."}]
            }]
        })
    );
}

#[test]
fn test_simple_bold_text() {
    let doc = document_of(AstNode::paragraph(vec![InlineSegment::from(
        AstNode::inline_quoted("strong", "Bold Text"),
    )]));
    assert_eq!(
        convert(&doc),
        json!({
            "type": "root",
            "children": [{
                "type": "paragraph",
                "children": [{
                    "type": "strong",
                    "children": [{"type": "text", "value": "Bold Text"}]
                }]
            }]
        })
    );
}

#[test]
fn test_simple_italic_text() {
    let doc = document_of(AstNode::paragraph(vec![InlineSegment::from(
        AstNode::inline_quoted("emphasis", "Italic text"),
    )]));
    assert_eq!(
        convert(&doc)["children"][0]["children"],
        json!([{"type": "emphasis", "children": [{"type": "text", "value": "Italic text"}]}])
    );
}

#[test]
fn test_monospaced_text() {
    let doc = document_of(AstNode::paragraph(vec![InlineSegment::from(
        AstNode::inline_quoted("monospaced", "Monospaced text"),
    )]));
    assert_eq!(
        convert(&doc)["children"][0]["children"],
        json!([{"type": "inlineCode", "value": "Monospaced text"}])
    );
}

#[test]
fn test_simple_link() {
    let doc = document_of(AstNode::paragraph(vec![InlineSegment::from(
        AstNode::anchor("https://example.com", "Link"),
    )]));
    assert_eq!(
        convert(&doc)["children"][0]["children"],
        json!([{
            "type": "link",
            "title": null,
            "url": "https://example.com",
            "children": [{"type": "text", "value": "Link"}]
        }])
    );
}

#[test]
fn test_block_image_without_alt() {
    let doc = AstNode::document(vec![AstNode::block_image("image.png", None)]);
    assert_eq!(
        convert(&doc),
        json!({
            "type": "root",
            "children": [{"type": "image", "alt": null, "url": "image.png"}]
        })
    );
}

#[test]
fn test_block_image_with_alt() {
    let doc = AstNode::document(vec![AstNode::block_image("image.png", Some("Logo"))]);
    assert_eq!(
        convert(&doc)["children"],
        json!([{"type": "image", "alt": "Logo", "url": "image.png"}])
    );
}

#[test]
fn test_document_attributes_are_kept_aside() {
    let doc = document_of(AstNode::paragraph("Body"));
    let (conversion, _) = mdast(&doc, remark_options());

    assert!(conversion.tree.get("attributes").is_none());
    assert_eq!(conversion.data.len(), 1);
    assert_eq!(conversion.data[0].node_name, "document");
    assert_eq!(conversion.data[0].attributes["doctype"], json!("article"));
}

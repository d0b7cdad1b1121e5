//! Whole-document conversions loaded from fixtures.

use crate::common::{load_fixture, mdast, pretty, remark_options};
use adoc_json::{ConverterOptions, Diagnostic};
use insta::assert_snapshot;
use serde_json::json;

#[test]
fn test_kitchensink_flat() {
    let doc = load_fixture("kitchensink.json");
    let (conversion, _) = mdast(&doc, remark_options());

    assert_snapshot!(pretty(&conversion.tree), @r#"
    {
      "type": "root",
      "children": [
        {
          "type": "paragraph",
          "children": [
            {
              "type": "text",
              "value": "Hello, "
            },
            {
              "type": "emphasis",
              "children": [
                {
                  "type": "text",
                  "value": "Asciidoctor"
                }
              ]
            }
          ],
          "position": {
            "start": {
              "line": 3,
              "column": 0
            },
            "end": {
              "line": 3,
              "column": 0
            }
          }
        },
        {
          "type": "heading",
          "depth": 2,
          "children": [
            {
              "type": "text",
              "value": "Intro"
            }
          ]
        },
        {
          "type": "paragraph",
          "children": [
            {
              "type": "text",
              "value": "See "
            },
            {
              "type": "link",
              "title": null,
              "url": "https://example.com",
              "children": [
                {
                  "type": "text",
                  "value": "Link"
                }
              ]
            },
            {
              "type": "text",
              "value": " and "
            },
            {
              "type": "inlineCode",
              "value": "code"
            }
          ]
        },
        {
          "type": "list",
          "items": [
            {
              "text": "Item 1",
              "blocks": []
            },
            {
              "text": [
                "Item with ",
                {
                  "type": "strong",
                  "children": [
                    {
                      "type": "text",
                      "value": "bold"
                    }
                  ]
                },
                " text"
              ],
              "blocks": []
            }
          ]
        },
        {
          "type": "image",
          "alt": "Logo",
          "url": "image.png"
        },
        {
          "type": "heading",
          "depth": 3,
          "children": [
            {
              "type": "text",
              "value": "Details"
            }
          ]
        },
        {
          "type": "unknown:custom_block",
          "children": [
            {
              "type": "text",
              "value": "Custom"
            }
          ]
        }
      ],
      "title": "Kitchen Sink",
      "position": {
        "start": {
          "line": 1,
          "column": 0,
          "file": "kitchensink.adoc"
        },
        "end": {
          "line": 1,
          "column": 0,
          "file": "kitchensink.adoc"
        }
      }
    }
    "#);
}

#[test]
fn test_kitchensink_nested_keeps_wrappers() {
    let doc = load_fixture("kitchensink.json");
    let (conversion, _) = mdast(&doc, ConverterOptions::default());
    let children = conversion.tree["children"].as_array().unwrap();

    assert_eq!(children.len(), 2);
    assert_eq!(
        children[0],
        json!({
            "type": "block",
            "name": "preamble",
            "context": "preamble",
            "children": [{
                "type": "paragraph",
                "children": [
                    {"type": "text", "value": "Hello, "},
                    {
                        "type": "emphasis",
                        "children": [{"type": "text", "value": "Asciidoctor"}],
                        "name": "inline_quoted",
                        "context": "quoted"
                    }
                ],
                "position": {"start": {"line": 3, "column": 0}, "end": {"line": 3, "column": 0}}
            }]
        })
    );

    let section = &children[1];
    assert_eq!(section["type"], json!("block"));
    let body = section["children"].as_array().unwrap();
    assert_eq!(body[0]["type"], json!("heading"));
    assert_eq!(body[0]["depth"], json!(2));
    // The nested section stays a wrapper as the last child of its parent.
    let nested = body.last().unwrap();
    assert_eq!(nested["type"], json!("block"));
    assert_eq!(nested["children"][0]["depth"], json!(3));
}

#[test]
fn test_kitchensink_reports_unknown_block() {
    let doc = load_fixture("kitchensink.json");
    let (_, sink) = mdast(&doc, remark_options());

    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::UnknownNodeKind {
            context: "open".to_string(),
            node_name: "custom_block".to_string(),
        }]
    );
    assert_eq!(
        sink.diagnostics()[0].to_string(),
        "Unprocessed node: open:custom_block"
    );
}

#[test]
fn test_kitchensink_attribute_side_channel() {
    let doc = load_fixture("kitchensink.json");
    let (conversion, _) = mdast(&doc, remark_options());

    let names: Vec<&str> = conversion
        .data
        .iter()
        .map(|record| record.node_name.as_str())
        .collect();
    assert_eq!(names, vec!["document"]);
    assert_eq!(conversion.data[0].ordinal, 0);
    assert_eq!(
        serde_json::to_value(&conversion.data[0]).unwrap(),
        json!({
            "ordinal": 0,
            "nodeName": "document",
            "attributes": {"doctype": "article", "doctitle": "Kitchen Sink"}
        })
    );
}

#[test]
fn test_simple_list_fixture() {
    let doc = load_fixture("simple-list.json");
    let (conversion, sink) = mdast(&doc, remark_options());

    assert!(sink.is_empty());
    assert_eq!(
        conversion.tree,
        json!({
            "type": "root",
            "children": [{
                "type": "list",
                "items": [
                    {"text": "Item 1", "blocks": []},
                    {"text": "Item 2", "blocks": []}
                ]
            }]
        })
    );
}

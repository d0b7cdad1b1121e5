//! Shared helpers for the integration tests.

use adoc_json::{AstNode, Backend, CollectingSink, Conversion, ConverterOptions, MdastBackend};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a source tree dumped as JSON from tests/fixtures.
pub fn load_fixture(name: &str) -> AstNode {
    let path = fixture_path(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    AstNode::from_json(&text).unwrap_or_else(|e| panic!("invalid fixture {name}: {e}"))
}

/// Options used by the remark comparison cases: flattened, without AsciiDoc metadata.
pub fn remark_options() -> ConverterOptions {
    ConverterOptions::default().flat(true).no_asciidoc_data(true)
}

/// Run the Mdast backend, capturing diagnostics instead of logging them.
pub fn mdast(node: &AstNode, options: ConverterOptions) -> (Conversion, CollectingSink) {
    let sink = CollectingSink::new();
    let conversion = MdastBackend::new(options)
        .with_sink(sink.clone())
        .convert(node);
    (conversion, sink)
}

pub fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).expect("JSON values always serialize")
}

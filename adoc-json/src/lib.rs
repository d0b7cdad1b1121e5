//! AsciiDoc document trees as JSON
//!
//!     This crate converts the AST of an AsciiDoc processor into a JSON tree, in one of two
//!     schemas: a plain dump that keeps the processor's own vocabulary, or a tree compatible with
//!     the Markdown AST (mdast) so that the unified/remark ecosystem can consume it.
//!
//!     TLDR: For backend authors:
//!         - The crate never parses AsciiDoc. Nodes arrive through the SourceNode trait and every
//!           accessor on it may be missing. A missing accessor is not an error.
//!         - Dispatch on NodeKind, never on which accessors happen to be present.
//!         - Conversion never fails. Unknown node kinds fall back to the generic encoder and
//!           unknown value shapes pass through; both are reported to the DiagnosticSink.
//!
//! Architecture
//!
//!     Data flows one way: source node → dispatcher → encoders → JSON tree. Encoders call back
//!     into the dispatcher for children and inline nodes, so the walk is a single depth-first
//!     pass. Results come back as Converted values (text, record or sequence) and the normalizer
//!     (./convert/normalize.rs) turns those into the canonical children arrays of the Mdast tree.
//!
//!     This is a pure lib: it powers adoc-json-cli but makes no assumption about a shell. No code
//!     here prints, reads environment variables or touches files.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── backend.rs              # Backend trait definition
//!     ├── registry.rs             # BackendRegistry for discovery and selection
//!     ├── diagnostics.rs          # Diagnostic records and sinks
//!     ├── options.rs              # flat / noAsciiDocData
//!     ├── source                  # SourceNode facade and the serde AstNode
//!     ├── convert                 # Converted, normalization, positions
//!     ├── backends
//!     │   ├── json                # plain dump
//!     │   └── mdast               # dispatcher + shape-specific encoders
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # mounts the sub directories
//!     ├── common
//!     ├── json
//!     ├── mdast
//!     └── fixtures
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs declares them.
//!
//! Known Limitations
//!
//!     - Source positions only carry the start line. End equals start and the column is 0.
//!     - An empty title (or alt, target, id, ...) is indistinguishable from a missing one.
//!     - Attributes are returned in Conversion::data rather than on the nodes themselves.
//!     - Deeply nested trees are converted recursively and share the thread's stack.

pub mod backend;
pub mod backends;
pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod options;
pub mod registry;
pub mod source;

pub use backend::Backend;
pub use backends::{JsonBackend, MdastBackend};
pub use convert::{AttributeRecord, Conversion, Converted, Normalizer};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use error::ConvertError;
pub use options::ConverterOptions;
pub use registry::BackendRegistry;
pub use source::{AstNode, SourceNode};

use serde_json::Value;

/// Converts a source tree to an Mdast-compatible JSON tree.
///
/// Diagnostics go to `tracing`; use [`MdastBackend::with_sink`] to capture them instead.
pub fn to_mdast(node: &dyn SourceNode, options: ConverterOptions) -> Value {
    MdastBackend::new(options).convert(node).tree
}

/// Converts a source tree to the plain JSON dump.
pub fn to_json(node: &dyn SourceNode) -> Value {
    JsonBackend::new().convert(node).tree
}

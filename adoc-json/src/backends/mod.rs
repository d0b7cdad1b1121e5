//! Backend implementations
//!
//! Each backend converts a source tree into one JSON schema:
//!
//! - json:  a flat dump that keeps the processor's own vocabulary (`name`, `context`, `blocks`)
//! - mdast: a tree compatible with the Markdown AST (`type`, `children`, `value`)

pub mod json;
pub mod mdast;

pub use json::JsonBackend;
pub use mdast::MdastBackend;

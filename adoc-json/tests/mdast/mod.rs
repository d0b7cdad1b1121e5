//! Mdast backend tests
//!
//! Trees are built the way an AsciiDoc processor would hand them over and compared with what
//! remark produces for the equivalent Markdown, minus positions.

mod document;
mod properties;
mod remark;

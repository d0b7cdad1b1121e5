//! Source position mapping
//!
//! The source AST only knows the line a node starts on, so start and end are the same point and
//! the column is always 0.

use crate::source::SourceNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

/// Position of `node`, or `None` when it has no line-numbered source location.
pub fn source_position(node: &dyn SourceNode) -> Option<Position> {
    let location = node.source_location()?;
    let point = Point {
        line: location.line?,
        column: 0,
        file: location.file.clone(),
    };
    Some(Position {
        start: point.clone(),
        end: point,
    })
}

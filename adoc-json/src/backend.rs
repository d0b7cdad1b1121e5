//! Backend trait definition
//!
//! A backend turns a source tree into one JSON schema. The trait gives every backend the same
//! surface so the registry and the CLI can treat them uniformly.

use crate::convert::Conversion;
use crate::error::ConvertError;
use crate::source::SourceNode;

/// Trait for output schemas
///
/// # Examples
///
/// ```ignore
/// struct MyBackend;
///
/// impl Backend for MyBackend {
///     fn name(&self) -> &str {
///         "my-backend"
///     }
///
///     fn convert(&self, node: &dyn SourceNode) -> Conversion {
///         Conversion::new(serde_json::json!({"name": node.node_name()}))
///     }
/// }
/// ```
pub trait Backend: Send + Sync {
    /// The name this backend is registered under (e.g., "json", "mdast")
    fn name(&self) -> &str;

    /// Optional description of this backend
    fn description(&self) -> &str {
        ""
    }

    /// Additional names the backend answers to
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Convert a source tree. Never fails; unknown constructs degrade to generic output.
    fn convert(&self, node: &dyn SourceNode) -> Conversion;

    /// Convert a source tree and serialize the resulting JSON tree.
    fn serialize(&self, node: &dyn SourceNode, pretty: bool) -> Result<String, ConvertError> {
        let conversion = self.convert(node);
        let text = if pretty {
            serde_json::to_string_pretty(&conversion.tree)?
        } else {
            serde_json::to_string(&conversion.tree)?
        };
        Ok(text)
    }
}

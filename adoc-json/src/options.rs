//! Converter options
//!
//! Accepts the same JSON shape the converter has always been configured with:
//! `{"flat": true, "noAsciiDocData": true}`. Missing keys default to `false`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConverterOptions {
    /// Collapse synthetic `block` wrappers into their parent's children.
    pub flat: bool,
    /// Leave out the `name`/`context` fields in Mdast output.
    #[serde(rename = "noAsciiDocData")]
    pub no_asciidoc_data: bool,
}

impl ConverterOptions {
    pub fn flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    pub fn no_asciidoc_data(mut self, no_asciidoc_data: bool) -> Self {
        self.no_asciidoc_data = no_asciidoc_data;
        self
    }
}

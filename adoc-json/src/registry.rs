//! Backend registry for backend discovery and selection
//!
//! Backends are registered under their name and every alias they declare, and retrieved by
//! any of those names.

use crate::backend::Backend;
use crate::backends::{JsonBackend, MdastBackend};
use crate::error::ConvertError;
use crate::options::ConverterOptions;
use crate::source::SourceNode;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of conversion backends
///
/// # Examples
///
/// ```ignore
/// let registry = BackendRegistry::with_defaults(ConverterOptions::default());
/// let json = registry.serialize(&document, "mdast", true)?;
/// ```
pub struct BackendRegistry {
    backends: HashMap<String, Arc<dyn Backend>>,
}

impl BackendRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        BackendRegistry {
            backends: HashMap::new(),
        }
    }

    /// Register a backend under its name and aliases
    ///
    /// Existing registrations with the same names are replaced.
    pub fn register<B: Backend + 'static>(&mut self, backend: B) {
        let backend: Arc<dyn Backend> = Arc::new(backend);
        for alias in backend.aliases() {
            self.backends.insert(alias.to_string(), Arc::clone(&backend));
        }
        self.backends.insert(backend.name().to_string(), backend);
    }

    /// Get a backend by name or alias
    pub fn get(&self, name: &str) -> Result<&dyn Backend, ConvertError> {
        self.backends
            .get(name)
            .map(|b| b.as_ref())
            .ok_or_else(|| ConvertError::BackendNotFound(name.to_string()))
    }

    /// Check if a backend exists
    pub fn has(&self, name: &str) -> bool {
        self.backends.contains_key(name)
    }

    /// List the canonical backend names (sorted, aliases excluded)
    pub fn list_backends(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .backends
            .iter()
            .filter(|(key, backend)| backend.name() == key.as_str())
            .map(|(key, _)| key.clone())
            .collect();
        names.sort();
        names
    }

    /// Convert and serialize a tree with the named backend
    pub fn serialize(
        &self,
        node: &dyn SourceNode,
        backend: &str,
        pretty: bool,
    ) -> Result<String, ConvertError> {
        self.get(backend)?.serialize(node, pretty)
    }

    /// Create a registry with both built-in backends
    pub fn with_defaults(options: ConverterOptions) -> Self {
        let mut registry = Self::new();

        registry.register(JsonBackend::new());
        registry.register(MdastBackend::new(options));

        registry
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults(ConverterOptions::default())
    }
}

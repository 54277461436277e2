//! Resource half of the capability registry.
//!
//! Resources are keyed by URI and populated once before the listener starts.
//! After that the registry is only read, so it is shared behind an `Arc`
//! without any locking.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::RegistryError;

/// Zero-argument reader producing the resource payload on each read.
pub type ResourceReader = fn() -> String;

/// A readable resource and the metadata advertised for it.
#[derive(Clone)]
pub struct ResourceEntry {
    pub uri: String,
    pub name: String,
    pub description: Option<String>,
    pub mime_type: String,
    reader: ResourceReader,
}

impl ResourceEntry {
    /// Create a `text/plain` resource entry.
    pub fn new(uri: impl Into<String>, name: impl Into<String>, reader: ResourceReader) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            description: None,
            mime_type: String::from("text/plain"),
            reader,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Produce the current payload.
    pub fn read(&self) -> String {
        (self.reader)()
    }
}

impl fmt::Debug for ResourceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceEntry")
            .field("uri", &self.uri)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("mime_type", &self.mime_type)
            .finish_non_exhaustive()
    }
}

/// URI → resource mapping. Iteration order is by URI.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    entries: BTreeMap<String, ResourceEntry>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the URI is already taken; the
    /// existing entry is left untouched.
    pub fn register(&mut self, entry: ResourceEntry) -> Result<(), RegistryError> {
        if self.contains(&entry.uri) {
            return Err(RegistryError::Duplicate(entry.uri));
        }
        tracing::debug!(uri = %entry.uri, name = %entry.name, "registered resource");
        self.entries.insert(entry.uri.clone(), entry);
        Ok(())
    }

    pub fn get(&self, uri: &str) -> Option<&ResourceEntry> {
        self.entries.get(uri)
    }

    /// Read a resource by URI, `None` when it is not registered.
    pub fn read(&self, uri: &str) -> Option<String> {
        self.get(uri).map(ResourceEntry::read)
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.entries.contains_key(uri)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello() -> String {
        "hello".to_string()
    }

    fn other() -> String {
        "other".to_string()
    }

    #[test]
    fn register_and_read() {
        let mut registry = ResourceRegistry::new();
        assert!(registry.is_empty());

        registry
            .register(ResourceEntry::new("test://hello", "hello", hello))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("test://hello"));
        assert_eq!(registry.read("test://hello").as_deref(), Some("hello"));
        assert_eq!(registry.get("test://hello").unwrap().mime_type, "text/plain");
    }

    #[test]
    fn duplicate_uri_is_rejected_and_first_entry_kept() {
        let mut registry = ResourceRegistry::new();
        registry
            .register(ResourceEntry::new("test://hello", "hello", hello))
            .unwrap();

        let err = registry
            .register(ResourceEntry::new("test://hello", "again", other))
            .unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("test://hello".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.read("test://hello").as_deref(), Some("hello"));
    }

    #[test]
    fn unknown_uri_reads_none() {
        let registry = ResourceRegistry::new();
        assert!(registry.read("test://missing").is_none());
    }

    #[test]
    fn iteration_is_sorted_by_uri() {
        let mut registry = ResourceRegistry::new();
        registry
            .register(ResourceEntry::new("b://x", "b", other))
            .unwrap();
        registry
            .register(ResourceEntry::new("a://x", "a", hello).with_description("first"))
            .unwrap();

        let uris: Vec<&str> = registry.iter().map(|e| e.uri.as_str()).collect();
        assert_eq!(uris, vec!["a://x", "b://x"]);
        assert_eq!(
            registry.get("a://x").unwrap().description.as_deref(),
            Some("first")
        );
    }
}

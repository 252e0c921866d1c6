use crate::OutputFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from lowercase format identifier to mandated file extension
/// (dot included).
///
/// The default registry covers the four built-in writers. Callers may supply
/// their own mapping of the same shape for a single resolution call; nothing
/// here is global or mutable between calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FormatRegistry(BTreeMap<String, String>);

impl Default for FormatRegistry {
    fn default() -> Self {
        OutputFormat::ALL
            .into_iter()
            .map(|f| (f.id().to_string(), f.extension().to_string()))
            .collect()
    }
}

impl FormatRegistry {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, id: impl Into<String>, extension: impl Into<String>) {
        self.0.insert(id.into(), extension.into());
    }

    pub fn extension_for(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn knows_extension(&self, extension: &str) -> bool {
        self.0.values().any(|e| e == extension)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Comma-separated identifier list, as quoted in error messages.
    pub fn supported_ids(&self) -> String {
        self.ids().collect::<Vec<_>>().join(", ")
    }

    /// Comma-separated extension list, as quoted in error messages.
    pub fn supported_extensions(&self) -> String {
        self.extensions().collect::<Vec<_>>().join(", ")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for FormatRegistry {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

//! Backend configuration properties.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String properties handed to a pubsub backend when it is initialised.
///
/// Hosts usually load these from their component configuration; the
/// registry never reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PubSubMetadata {
    properties: BTreeMap<String, String>,
}

impl PubSubMetadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses metadata from a JSON object of string values.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the input is not a JSON object
    /// whose values are all strings.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Sets a property, replacing any previous value.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns the value of a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Returns all properties in key order.
    #[must_use]
    pub const fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Returns `true` when no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

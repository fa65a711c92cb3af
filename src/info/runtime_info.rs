//! Registered and loaded component bookkeeping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

/// Registration and load history for a single service.
///
/// Both lists keep first-seen order and never contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInfo {
    registered: Vec<String>,
    loaded: Vec<String>,
}

impl ComponentInfo {
    /// Returns the names registered for this service.
    #[must_use]
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    /// Returns the names that have been constructed at least once.
    #[must_use]
    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }

    fn record_registered(&mut self, name: &str) {
        push_unique(&mut self.registered, name);
    }

    fn record_loaded(&mut self, name: &str) {
        push_unique(&mut self.loaded, name);
    }
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|existing| existing == name) {
        names.push(name.to_owned());
    }
}

/// Point-in-time copy of a [`RuntimeInfo`], suitable for serialisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInfoSnapshot {
    /// Component history keyed by service name.
    pub services: BTreeMap<String, ComponentInfo>,
}

impl RuntimeInfoSnapshot {
    /// Renders the snapshot as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Thread-safe runtime metadata shared between registries.
///
/// Registries hold this behind an `Arc` and only ever append to it.
#[derive(Debug, Default)]
pub struct RuntimeInfo {
    services: RwLock<BTreeMap<String, ComponentInfo>>,
}

impl RuntimeInfo {
    /// Creates metadata with no known services.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a service. Existing history for the service is kept.
    pub fn add_service(&self, service: &str) {
        let mut services = self.services.write().unwrap_or_else(PoisonError::into_inner);
        services.entry(service.to_owned()).or_default();
    }

    /// Records that `name` was registered under `service`.
    pub fn register_component(&self, service: &str, name: &str) {
        let mut services = self.services.write().unwrap_or_else(PoisonError::into_inner);
        services
            .entry(service.to_owned())
            .or_default()
            .record_registered(name);
    }

    /// Records that `name` was constructed under `service`.
    pub fn load_component(&self, service: &str, name: &str) {
        let mut services = self.services.write().unwrap_or_else(PoisonError::into_inner);
        services
            .entry(service.to_owned())
            .or_default()
            .record_loaded(name);
    }

    /// Returns the history for `service`, if it has been declared.
    #[must_use]
    pub fn component_info(&self, service: &str) -> Option<ComponentInfo> {
        let services = self.services.read().unwrap_or_else(PoisonError::into_inner);
        services.get(service).cloned()
    }

    /// Returns the declared service names in sorted order.
    #[must_use]
    pub fn services(&self) -> Vec<String> {
        let services = self.services.read().unwrap_or_else(PoisonError::into_inner);
        services.keys().cloned().collect()
    }

    /// Copies the current state into a serialisable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> RuntimeInfoSnapshot {
        let services = self.services.read().unwrap_or_else(PoisonError::into_inner);
        RuntimeInfoSnapshot {
            services: services.clone(),
        }
    }
}

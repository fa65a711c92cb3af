//! Shared world state for pubsub registration BDD scenarios.

use std::sync::{Arc, Mutex, PoisonError};

use crate::support::StubPubSub;
use component_registry::{
    component::ComponentError,
    info::RuntimeInfo,
    pubsub::services::{PubSubFactory, PubSubRegistry, new_factory},
};
use rstest::fixture;

/// Factory specification queued before registration.
pub struct PendingFactory {
    /// Component name to register.
    pub name: String,
    /// Label recorded each time the constructor runs.
    pub label: String,
}

/// Scenario world for pubsub registration behaviour tests.
pub struct RegistryWorld {
    /// The registry under test.
    pub registry: PubSubRegistry,
    /// Factories queued for registration, in order.
    pub pending_factories: Vec<PendingFactory>,
    /// Labels of every constructor invocation, in call order.
    pub build_log: Arc<Mutex<Vec<String>>>,
    /// Result of the last `create` call.
    pub last_create_result: Option<Result<(), ComponentError>>,
}

impl RegistryWorld {
    /// Creates a world with an empty registry and no pending factories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: PubSubRegistry::new(Arc::new(RuntimeInfo::new())),
            pending_factories: Vec::new(),
            build_log: Arc::new(Mutex::new(Vec::new())),
            last_create_result: None,
        }
    }

    /// Builds a factory whose constructor appends `label` to the build log.
    pub fn factory_for(&self, pending: &PendingFactory) -> PubSubFactory {
        let log = Arc::clone(&self.build_log);
        let label = pending.label.clone();
        new_factory(pending.name.clone(), move || {
            let mut entries = log.lock().unwrap_or_else(PoisonError::into_inner);
            entries.push(label.clone());
            let instance = entries.len();
            drop(entries);
            StubPubSub::new("scenario", instance)
        })
    }

    /// Returns a copy of the build log.
    #[must_use]
    pub fn builds(&self) -> Vec<String> {
        self.build_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for RegistryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RegistryWorld {
    RegistryWorld::default()
}

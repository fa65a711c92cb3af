//! Service layer for pubsub backend registration and construction.
//!
//! Provides [`PubSubRegistry`], the registry the host runtime consults when a
//! caller asks for a pubsub component by name.

use crate::component::{ComponentRegistry, ComponentResult, Factory};
use crate::info::RuntimeInfo;
use crate::pubsub::ports::PubSub;
use std::sync::Arc;

/// Service name under which pubsub components are recorded.
pub const SERVICE_NAME: &str = "pubsub";

/// Factory producing boxed pubsub backends.
pub type PubSubFactory = Factory<Box<dyn PubSub>>;

/// Creates a [`PubSubFactory`] from a constructor returning a concrete
/// backend type.
#[must_use]
pub fn new_factory<P, F>(name: impl Into<String>, constructor: F) -> PubSubFactory
where
    P: PubSub + 'static,
    F: Fn() -> P + Send + Sync + 'static,
{
    Factory::new(name, move || Box::new(constructor()) as Box<dyn PubSub>)
}

/// Registry of pubsub backend factories.
///
/// Built once at startup and shared behind an `Arc`. Registration may
/// continue while other threads create components.
#[derive(Debug)]
pub struct PubSubRegistry {
    inner: ComponentRegistry<Box<dyn PubSub>>,
}

impl PubSubRegistry {
    /// Creates an empty pubsub registry backed by shared runtime metadata.
    #[must_use]
    pub fn new(info: Arc<RuntimeInfo>) -> Self {
        Self {
            inner: ComponentRegistry::new(SERVICE_NAME, info),
        }
    }

    /// Registers pubsub factories. A name registered twice keeps the later
    /// factory.
    pub fn register(&self, factories: impl IntoIterator<Item = PubSubFactory>) {
        self.inner.register(factories);
    }

    /// Constructs a new pubsub backend registered under `name`.
    ///
    /// The returned backend has not been initialised.
    ///
    /// # Errors
    ///
    /// Returns [`crate::component::ComponentError::NotRegistered`] when no
    /// factory has the given name.
    pub fn create(&self, name: &str) -> ComponentResult<Box<dyn PubSub>> {
        self.inner.create(name)
    }

    /// Returns `true` when a backend is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    /// Returns registered backend names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.inner.names()
    }

    /// Returns the number of registered backends.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` when no backend has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the service name, always [`SERVICE_NAME`].
    #[must_use]
    pub fn service(&self) -> &str {
        self.inner.service()
    }

    /// Returns the shared runtime metadata.
    #[must_use]
    pub const fn runtime_info(&self) -> &Arc<RuntimeInfo> {
        self.inner.runtime_info()
    }
}

//! Thread-safe name-to-factory registry.
//!
//! Provides [`ComponentRegistry`], which stores factories for one runtime
//! service and constructs components on request.

use crate::component::{ComponentError, ComponentResult, Factory};
use crate::info::RuntimeInfo;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// Registry of component factories for a single runtime service.
///
/// Registration replaces any factory already stored under the same name and
/// logs a warning when it does. Lookups take a read lock only long enough to
/// clone the factory handle, so constructors run without holding the lock.
pub struct ComponentRegistry<C> {
    service: String,
    info: Arc<RuntimeInfo>,
    factories: RwLock<BTreeMap<String, Factory<C>>>,
}

impl<C> ComponentRegistry<C> {
    /// Creates an empty registry for `service` and declares the service in
    /// the shared runtime metadata.
    #[must_use]
    pub fn new(service: impl Into<String>, info: Arc<RuntimeInfo>) -> Self {
        let service_name = service.into();
        info.add_service(&service_name);
        Self {
            service: service_name,
            info,
            factories: RwLock::new(BTreeMap::new()),
        }
    }

    /// Returns the service name this registry serves.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the shared runtime metadata.
    #[must_use]
    pub const fn runtime_info(&self) -> &Arc<RuntimeInfo> {
        &self.info
    }

    /// Registers zero or more factories.
    ///
    /// A factory whose name is already present replaces the stored one (last
    /// registration wins). Each replacement is reported with a `warn` event.
    pub fn register(&self, factories: impl IntoIterator<Item = Factory<C>>) {
        // Drain the caller's iterator before locking; it may consult this
        // registry.
        let incoming: Vec<_> = factories.into_iter().collect();
        let mut stored = self
            .factories
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        for factory in incoming {
            let name = factory.name().to_owned();
            if stored.insert(name.clone(), factory).is_some() {
                tracing::warn!(
                    service = %self.service,
                    component = %name,
                    "component factory replaced by a later registration"
                );
            } else {
                tracing::debug!(
                    service = %self.service,
                    component = %name,
                    "component factory registered"
                );
            }
            self.info.register_component(&self.service, &name);
        }
    }

    /// Constructs a new component registered under `name`.
    ///
    /// The constructor runs once per call. Failures or panics raised by the
    /// constructor are not intercepted.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::NotRegistered`] when no factory has the
    /// given name.
    pub fn create(&self, name: &str) -> ComponentResult<C> {
        let factory = self.lookup(name)?;
        self.info.load_component(&self.service, name);
        tracing::debug!(service = %self.service, component = %name, "constructing component");
        Ok(factory.construct())
    }

    /// Returns `true` when a factory is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Returns the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Returns the number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn lookup(&self, name: &str) -> ComponentResult<Factory<C>> {
        self.read()
            .get(name)
            .cloned()
            .ok_or_else(|| ComponentError::NotRegistered {
                service: self.service.clone(),
                name: name.to_owned(),
            })
    }

    // Every mutation is a single map insert, so a poisoned lock still guards
    // a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Factory<C>>> {
        self.factories.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C> fmt::Debug for ComponentRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("service", &self.service)
            .field("names", &self.names())
            .finish_non_exhaustive()
    }
}

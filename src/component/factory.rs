//! Named capability constructors.

use std::fmt;
use std::sync::Arc;

/// Shared handle to a zero-argument capability constructor.
pub type Constructor<C> = Arc<dyn Fn() -> C + Send + Sync>;

/// A component name paired with the constructor that builds it.
///
/// The name is not validated. An empty name is legal, it just cannot be
/// reached unless the caller asks for the empty string.
pub struct Factory<C> {
    name: String,
    constructor: Constructor<C>,
}

impl<C> Factory<C> {
    /// Creates a factory. Nothing is constructed until [`Self::construct`]
    /// is called.
    #[must_use]
    pub fn new<F>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            constructor: Arc::new(constructor),
        }
    }

    /// Returns the component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the constructor and returns the new capability.
    #[must_use]
    pub fn construct(&self) -> C {
        (self.constructor)()
    }
}

impl<C> Clone for Factory<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            constructor: Arc::clone(&self.constructor),
        }
    }
}

impl<C> fmt::Debug for Factory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

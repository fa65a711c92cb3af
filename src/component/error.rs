//! Error types for component lookup.

use thiserror::Error;

/// Result type for component registry operations.
pub type ComponentResult<T> = Result<T, ComponentError>;

/// Errors returned while resolving a component by name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComponentError {
    /// No factory is registered under the requested name.
    #[error("{service} component '{name}' is not registered")]
    NotRegistered {
        /// Service the registry serves, e.g. `pubsub`.
        service: String,
        /// Requested component name.
        name: String,
    },
}

//! Shared runtime metadata for component registries.
//!
//! A single [`RuntimeInfo`] is created by the host runtime and handed to every
//! registry it builds. Registries record which component names were
//! registered and which were loaded, so diagnostics can report what the
//! runtime knows about without querying each registry.

mod runtime_info;

pub use runtime_info::{ComponentInfo, RuntimeInfo, RuntimeInfoSnapshot};

//! Generic name-keyed component registration and construction.
//!
//! A [`ComponentRegistry`] maps component names to [`Factory`] values and
//! builds a fresh capability each time a name is requested. The registry is
//! generic over the capability type so each runtime service (for example
//! [`crate::pubsub`]) can specialise it without repeating the lookup rules:
//!
//! - Registering a name that already exists replaces the earlier factory.
//! - Requesting an unknown name returns [`ComponentError::NotRegistered`].
//! - Whatever the constructor does, including panicking, reaches the caller
//!   of [`ComponentRegistry::create`] untouched.

mod error;
mod factory;
mod registry;

pub use error::{ComponentError, ComponentResult};
pub use factory::{Constructor, Factory};
pub use registry::ComponentRegistry;

#[cfg(test)]
mod tests;

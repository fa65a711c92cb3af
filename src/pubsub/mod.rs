//! Publish/subscribe component registration for the host runtime.
//!
//! The runtime asks a [`services::PubSubRegistry`] for a pubsub backend by
//! name and receives a fresh [`ports::PubSub`] instance. Backends themselves
//! live outside this crate; only their contract is defined here. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Registry services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

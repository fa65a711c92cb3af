//! Port contracts for pubsub capabilities.
//!
//! Ports define the infrastructure-agnostic interface that registry
//! factories construct and the host runtime consumes.

pub mod pubsub;

#[cfg(test)]
pub use pubsub::MockPubSub;
pub use pubsub::{MessageHandler, PubSub, PubSubError, PubSubResult};

//! Registry services for pubsub backends.

mod registry;

pub use registry::{PubSubFactory, PubSubRegistry, SERVICE_NAME, new_factory};

//! Domain values exchanged with pubsub backends.
//!
//! These are plain data carriers. Broker semantics belong to the backend
//! that receives them.

mod error;
mod feature;
mod message;
mod metadata;

pub use error::{ParseFeatureError, PubSubDomainError};
pub use feature::Feature;
pub use message::{PubSubMessage, PublishRequest, SubscribeRequest};
pub use metadata::PubSubMetadata;

//! Step definitions for pubsub registration behaviour tests.

pub mod then;
pub mod world;

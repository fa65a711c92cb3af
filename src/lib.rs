//! Component registry: name-keyed construction of pluggable runtime
//! capabilities.
//!
//! A host runtime registers one factory per supported implementation of a
//! capability and later asks for an implementation by its configured name.
//! Each request constructs a new instance; the registry never caches or
//! manages what it builds.
//!
//! # Architecture
//!
//! - [`component`]: the generic factory and registry
//! - [`info`]: runtime metadata shared between registries
//! - [`pubsub`]: the publish/subscribe capability port and its registry
//!
//! # Example
//!
//! ```ignore
//! let info = Arc::new(RuntimeInfo::new());
//! let registry = PubSubRegistry::new(Arc::clone(&info));
//! registry.register([new_factory("redis", RedisPubSub::default)]);
//! let backend = registry.create("redis")?;
//! ```

pub mod component;
pub mod info;
pub mod pubsub;

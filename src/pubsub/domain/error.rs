//! Error types for pubsub domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing pubsub domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PubSubDomainError {
    /// The topic is empty after trimming.
    #[error("topic must not be empty")]
    EmptyTopic,

    /// The pubsub component name is empty after trimming.
    #[error("pubsub name must not be empty")]
    EmptyPubSubName,
}

/// Error returned while parsing a backend feature name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown pubsub feature: {0}")]
pub struct ParseFeatureError(pub String);

//! Publish and subscribe payloads.

use super::{PubSubDomainError, PubSubMetadata};
use serde::{Deserialize, Serialize};

fn non_empty(raw: impl Into<String>, err: PubSubDomainError) -> Result<String, PubSubDomainError> {
    let value = raw.into().trim().to_owned();
    if value.is_empty() {
        return Err(err);
    }
    Ok(value)
}

/// Request to publish a payload to a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    pubsub_name: String,
    topic: String,
    data: Vec<u8>,
    content_type: Option<String>,
    metadata: PubSubMetadata,
}

impl PublishRequest {
    /// Creates a publish request.
    ///
    /// The component and topic names are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`PubSubDomainError::EmptyPubSubName`] or
    /// [`PubSubDomainError::EmptyTopic`] when the corresponding name is
    /// blank.
    pub fn new(
        pubsub_name: impl Into<String>,
        topic: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Result<Self, PubSubDomainError> {
        Ok(Self {
            pubsub_name: non_empty(pubsub_name, PubSubDomainError::EmptyPubSubName)?,
            topic: non_empty(topic, PubSubDomainError::EmptyTopic)?,
            data: data.into(),
            content_type: None,
            metadata: PubSubMetadata::new(),
        })
    }

    /// Sets the payload content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets per-request metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: PubSubMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns the target pubsub component name.
    #[must_use]
    pub fn pubsub_name(&self) -> &str {
        &self.pubsub_name
    }

    /// Returns the topic.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the payload.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the payload content type, if set.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns per-request metadata.
    #[must_use]
    pub const fn metadata(&self) -> &PubSubMetadata {
        &self.metadata
    }
}

/// Request to receive messages published to a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    topic: String,
    metadata: PubSubMetadata,
}

impl SubscribeRequest {
    /// Creates a subscribe request for a trimmed topic.
    ///
    /// # Errors
    ///
    /// Returns [`PubSubDomainError::EmptyTopic`] when the topic is blank.
    pub fn new(topic: impl Into<String>) -> Result<Self, PubSubDomainError> {
        Ok(Self {
            topic: non_empty(topic, PubSubDomainError::EmptyTopic)?,
            metadata: PubSubMetadata::new(),
        })
    }

    /// Sets per-subscription metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: PubSubMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns the topic.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns per-subscription metadata.
    #[must_use]
    pub const fn metadata(&self) -> &PubSubMetadata {
        &self.metadata
    }
}

/// Message delivered to a subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubSubMessage {
    topic: String,
    data: Vec<u8>,
    metadata: PubSubMetadata,
}

impl PubSubMessage {
    /// Creates a delivered message.
    #[must_use]
    pub fn new(topic: impl Into<String>, data: impl Into<Vec<u8>>, metadata: PubSubMetadata) -> Self {
        Self {
            topic: topic.into(),
            data: data.into(),
            metadata,
        }
    }

    /// Returns the topic the message was published to.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the payload.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns message metadata.
    #[must_use]
    pub const fn metadata(&self) -> &PubSubMetadata {
        &self.metadata
    }
}

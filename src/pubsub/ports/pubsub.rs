//! Capability port implemented by pubsub backends.

use crate::pubsub::domain::{
    Feature, PubSubDomainError, PubSubMessage, PubSubMetadata, PublishRequest, SubscribeRequest,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for pubsub backend operations.
pub type PubSubResult<T> = Result<T, PubSubError>;

/// Publish/subscribe backend contract.
///
/// Instances are produced by registry factories and owned by the caller that
/// requested them. Connection management, delivery guarantees, and retry
/// behaviour are up to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PubSub: Send + Sync {
    /// Configures the backend before first use.
    async fn init(&mut self, metadata: PubSubMetadata) -> PubSubResult<()>;

    /// Lists the optional features this backend supports.
    fn features(&self) -> Vec<Feature>;

    /// Publishes a payload.
    async fn publish(&self, request: PublishRequest) -> PubSubResult<()>;

    /// Starts delivering messages for a topic to `handler`.
    async fn subscribe(
        &self,
        request: SubscribeRequest,
        handler: Arc<dyn MessageHandler>,
    ) -> PubSubResult<()>;

    /// Releases backend resources.
    async fn close(&mut self) -> PubSubResult<()>;
}

/// Receiver for messages delivered by a subscription.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Handles one delivered message.
    async fn handle(&self, message: PubSubMessage) -> PubSubResult<()>;
}

/// Errors returned by pubsub backend implementations.
#[derive(Debug, Clone, Error)]
pub enum PubSubError {
    /// An operation was attempted before [`PubSub::init`] succeeded.
    #[error("pubsub backend is not initialised")]
    NotInitialised,

    /// The backend does not support a requested feature.
    #[error("pubsub backend does not support feature: {0}")]
    UnsupportedFeature(Feature),

    /// A request value failed validation.
    #[error(transparent)]
    Domain(#[from] PubSubDomainError),

    /// Broker or transport failure.
    #[error("pubsub backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl PubSubError {
    /// Wraps a broker or transport error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}

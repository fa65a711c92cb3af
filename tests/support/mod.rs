//! Shared backend doubles for pubsub registry integration tests.

use async_trait::async_trait;
use component_registry::pubsub::{
    domain::{Feature, PubSubMessage, PubSubMetadata, PublishRequest, SubscribeRequest},
    ports::{MessageHandler, PubSub, PubSubError, PubSubResult},
};
use std::sync::Arc;

/// Minimal backend that identifies the constructor that produced it.
///
/// Once initialised, every subscription immediately receives one message on
/// the requested topic whose payload is the constructor label and whose
/// metadata carries `built_by` (the label) and `instance` (the sequence
/// number).
#[derive(Debug)]
pub struct StubPubSub {
    label: &'static str,
    instance: usize,
    initialised: bool,
}

impl StubPubSub {
    /// Creates an uninitialised stub.
    #[must_use]
    pub const fn new(label: &'static str, instance: usize) -> Self {
        Self {
            label,
            instance,
            initialised: false,
        }
    }

    fn ensure_initialised(&self) -> PubSubResult<()> {
        if self.initialised {
            Ok(())
        } else {
            Err(PubSubError::NotInitialised)
        }
    }
}

#[async_trait]
impl PubSub for StubPubSub {
    async fn init(&mut self, _metadata: PubSubMetadata) -> PubSubResult<()> {
        self.initialised = true;
        Ok(())
    }

    fn features(&self) -> Vec<Feature> {
        vec![Feature::MessageTtl]
    }

    async fn publish(&self, _request: PublishRequest) -> PubSubResult<()> {
        self.ensure_initialised()
    }

    async fn subscribe(
        &self,
        request: SubscribeRequest,
        handler: Arc<dyn MessageHandler>,
    ) -> PubSubResult<()> {
        self.ensure_initialised()?;
        let metadata = PubSubMetadata::new()
            .with_property("built_by", self.label)
            .with_property("instance", self.instance.to_string());
        let message = PubSubMessage::new(request.topic(), self.label, metadata);
        handler.handle(message).await
    }

    async fn close(&mut self) -> PubSubResult<()> {
        self.initialised = false;
        Ok(())
    }
}

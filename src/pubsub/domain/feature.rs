//! Optional behaviours a pubsub backend may advertise.

use super::ParseFeatureError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional capability advertised by a pubsub backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Messages may carry a time-to-live.
    MessageTtl,
    /// Subscriptions may use wildcard topics.
    SubscribeWildcards,
    /// Several messages may be published in one call.
    BulkPublish,
}

impl Feature {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MessageTtl => "message_ttl",
            Self::SubscribeWildcards => "subscribe_wildcards",
            Self::BulkPublish => "bulk_publish",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Feature {
    type Error = ParseFeatureError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "message_ttl" => Ok(Self::MessageTtl),
            "subscribe_wildcards" => Ok(Self::SubscribeWildcards),
            "bulk_publish" => Ok(Self::BulkPublish),
            _ => Err(ParseFeatureError(value.to_owned())),
        }
    }
}

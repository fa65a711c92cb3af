//! Unit tests for the pubsub module.

//! Unit tests for the generic component registry.

//! Adapters for external dependencies.

pub mod matches_memory;

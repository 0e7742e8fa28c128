//! Repository traits for domain layer.

pub mod matches;

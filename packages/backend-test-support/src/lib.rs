//! Shared helpers for darts backend tests.

pub mod logging;

//! Shared deterministic test fixtures for the due date engine.

mod fixtures;

pub use fixtures::{datetime, time};

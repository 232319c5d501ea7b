//! Storage Layer - Core Traits
//!
//! Defines the abstract interface for durable string storage.
//! Implementations can use browser local storage, in-memory maps, etc.

use crate::error::PlannerResult;

/// Durable string store addressed by fixed keys.
///
/// Reads return the last write, or `None` when nothing was written.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> PlannerResult<()>;

    fn remove(&mut self, key: &str) -> PlannerResult<()>;
}

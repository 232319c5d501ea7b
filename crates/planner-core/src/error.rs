//! Planner Errors
//!
//! The only failures the planner can observe happen at the storage boundary.
//! Everything else degrades to a no-op.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Common result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

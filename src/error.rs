//! Error types for transform-plan.
//!
//! Resolution itself is total — every signal combination produces a plan —
//! so [`PlanError`] only covers the host boundary: rendering the plan to
//! JSON and writing it out.

use thiserror::Error;

/// Core error type for transform-plan operations.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Failed to serialize the plan.
    #[error("Failed to serialize plan: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for transform-plan operations.
pub type Result<T> = std::result::Result<T, PlanError>;

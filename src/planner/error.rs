//! Planning engine error types.

use thiserror::Error;

/// Result type for planning operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors that can occur while generating a pitch plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The prompt was empty after trimming.
    #[error("Prompt is required.")]
    InvalidInput,
}

use thiserror::Error;

/// Per-request failures, returned to the caller as typed results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecommendError {
    /// Malformed or out-of-domain input; the message is safe to surface verbatim.
    #[error("invalid requirement: {0}")]
    InvalidRequirement(String),

    /// Every candidate costs more than the budget. Never relaxed silently.
    #[error("no model fits a budget of {budget} per 1M input tokens")]
    EmptyCatalog { budget: f64 },
}

use thiserror::Error;

/// Invariant violations found while loading the catalog. Always startup-fatal.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog source unreadable: {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no models")]
    Empty,

    #[error("model at index {index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate model name: {0}")]
    DuplicateName(String),

    #[error("model '{model}': {field} must be finite and non-negative (got {value})")]
    InvalidNumber {
        model: String,
        field: &'static str,
        value: f64,
    },

    #[error("model '{model}': context_window must be positive")]
    ZeroContextWindow { model: String },

    #[error("model '{model}': missing task score for '{task}'")]
    MissingTaskScore { model: String, task: &'static str },

    #[error("model '{model}': task score for '{task}' must be within [0, 1] (got {value})")]
    TaskScoreOutOfRange {
        model: String,
        task: &'static str,
        value: f64,
    },

    #[error("model not found: {0}")]
    NotFound(String),
}

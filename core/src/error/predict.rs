use thiserror::Error;

/// Reasons the confirmation model produced no prediction. Never fatal to a request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    #[error("confirmation model unavailable: {0}")]
    Unavailable(String),

    #[error("feature '{feature}' = {value} outside trained range [{min}, {max}]")]
    OutOfDistribution {
        feature: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("predicted label '{0}' is not in the catalog")]
    UnknownLabel(String),
}

//! Confirmation-model capability consumed by the orchestrator.

pub mod features;
pub mod r#trait;

pub use features::{encode, Features, BUDGET_FEATURE, FEATURE_COUNT, FEATURE_NAMES};
pub use r#trait::ModelPredictor;

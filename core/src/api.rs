//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `llmmatch_core::api` instead of reaching into internal modules.

pub use crate::catalog::{Catalog, Deployment, LatencyClass, ModelSpec, TaskType};
pub use crate::config::{
    load_default, AppConfig, CatalogConfig, HttpServerConfig, LoggingConfig, MlConfig,
    RecommendConfig,
};
pub use crate::error::{CatalogError, CliError, PredictError, RecommendError};
pub use crate::predict::{encode, Features, ModelPredictor, FEATURE_COUNT, FEATURE_NAMES};
pub use crate::recommend::{
    ModelScore, RecommendResponse, RecommendationResult, Recommender, TopPick,
};
pub use crate::requirement::{ContextLength, Priority, RequirementInput, UserRequirement};
pub use crate::scoring::{
    explain, weights_for, Criterion, FitBreakdown, ScoredCandidate, ScoringEngine, Weights,
};

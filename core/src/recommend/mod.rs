//! Validation, ranking, explanation and ML confirmation, assembled per request.

mod orchestrator;
mod result;

pub use orchestrator::Recommender;
pub use result::{ModelScore, RecommendResponse, RecommendationResult, TopPick};

//! Fit evaluation, weighting, ranking and explanation.

pub mod engine;
pub mod explain;
pub mod fit;
pub mod weights;

pub use engine::{composite_score, ScoredCandidate, ScoringEngine};
pub use explain::explain;
pub use fit::{evaluate, Criterion, Evaluation, FitBreakdown};
pub use weights::{weights_for, Weights};

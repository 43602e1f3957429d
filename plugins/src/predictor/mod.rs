//! Decision-tree confirmation model: fitting, synthetic training data, and
//! the JSON artifact it is persisted as.

pub mod artifact;
pub mod train;
pub mod tree;

pub use artifact::{catalog_fingerprint, TreeArtifact, ARTIFACT_VERSION};
pub use train::{accuracy, synthesize, train, TrainingSet, BUDGET_RANGE};
pub use tree::{DecisionTree, DecisionTreePredictor, Node, TreeParams};

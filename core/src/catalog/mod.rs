//! Read-only registry of candidate models.

mod store;
pub mod types;

pub use store::Catalog;
pub use types::{Deployment, LatencyClass, ModelSpec, TaskType};

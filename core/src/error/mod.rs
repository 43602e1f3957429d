pub mod catalog;
#[allow(clippy::module_inception)]
pub mod error;
pub mod predict;
pub mod recommend;

pub use catalog::CatalogError;
pub use error::CliError;
pub use predict::PredictError;
pub use recommend::RecommendError;

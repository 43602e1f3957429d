use crate::error::PredictError;
use crate::requirement::UserRequirement;

/// Independent predictor of the single best model for a requirement.
///
/// Implementations are loaded once at startup and consulted read-only; a
/// prediction must be a pure in-process computation.
pub trait ModelPredictor: Send + Sync {
    fn name(&self) -> &str;
    fn predict(&self, req: &UserRequirement) -> Result<String, PredictError>;
}

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::RecommendConfig;
use crate::error::{PredictError, RecommendError};
use crate::predict::ModelPredictor;
use crate::requirement::{RequirementInput, UserRequirement};
use crate::scoring::{explain, ScoringEngine};

use super::result::RecommendationResult;

/// Entry point for recommendations.
///
/// Holds the catalog and the optional confirmation model behind `Arc`s; both
/// are read-only after startup, so a `Recommender` can be shared across
/// threads and serve concurrent requests without locking.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    predictor: Option<Arc<dyn ModelPredictor>>,
    max_alternatives: usize,
}

impl Recommender {
    pub fn new(
        catalog: Arc<Catalog>,
        predictor: Option<Arc<dyn ModelPredictor>>,
        cfg: &RecommendConfig,
    ) -> Self {
        Self {
            catalog,
            predictor,
            max_alternatives: cfg.max_alternatives,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn predictor_name(&self) -> Option<&str> {
        self.predictor.as_deref().map(|p| p.name())
    }

    /// Validate a raw requirement, then recommend.
    pub fn recommend(
        &self,
        input: &RequirementInput,
    ) -> Result<RecommendationResult<'_>, RecommendError> {
        let req = UserRequirement::try_from(input)?;
        self.recommend_validated(&req)
    }

    pub fn recommend_validated(
        &self,
        req: &UserRequirement,
    ) -> Result<RecommendationResult<'_>, RecommendError> {
        let mut ranked = ScoringEngine::rank(req, &self.catalog).into_iter();

        let Some(mut top_pick) = ranked.next() else {
            tracing::info!(budget = req.budget, "every model excluded by budget");
            return Err(RecommendError::EmptyCatalog { budget: req.budget });
        };
        let mut alternatives: Vec<_> = ranked.take(self.max_alternatives).collect();

        top_pick.explanation = explain(&top_pick, req);
        for alt in alternatives.iter_mut() {
            alt.explanation = explain(alt, req);
        }

        let ml_prediction = self.confirm(req);
        let is_ml_pick = ml_prediction.as_deref() == Some(top_pick.model.name.as_str());

        tracing::info!(
            top_pick = %top_pick.model.name,
            score = top_pick.composite_score,
            alternatives = alternatives.len(),
            ml_prediction = ml_prediction.as_deref().unwrap_or("-"),
            is_ml_pick,
            "recommendation ready"
        );

        Ok(RecommendationResult {
            task_type: req.task_type,
            top_pick,
            alternatives,
            ml_prediction,
            is_ml_pick,
        })
    }

    /// Ask the confirmation model; any failure degrades to no prediction.
    fn confirm(&self, req: &UserRequirement) -> Option<String> {
        let predictor = self.predictor.as_deref()?;

        let outcome = predictor.predict(req).and_then(|name| {
            if self.catalog.contains(&name) {
                Ok(name)
            } else {
                Err(PredictError::UnknownLabel(name))
            }
        });

        match outcome {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::warn!(predictor = predictor.name(), error = %e, "ML prediction skipped");
                None
            }
        }
    }
}

use std::cmp::Ordering;

use crate::catalog::{Catalog, ModelSpec};
use crate::requirement::UserRequirement;

use super::fit::{evaluate, Evaluation, FitBreakdown};
use super::weights::{weights_for, Weights};

/// One model scored against one request. Borrows its spec from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub model: &'a ModelSpec,
    pub fit_breakdown: FitBreakdown,
    pub composite_score: u8,
    /// Empty until the orchestrator explains the candidates it returns.
    pub explanation: String,
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Rank every model that fits the budget, best first.
    ///
    /// Order: composite score descending, then cheaper input cost, then name.
    /// The result is independent of catalog order. An empty result means the
    /// budget excluded everything; no constraint is relaxed.
    pub fn rank<'a>(req: &UserRequirement, catalog: &'a Catalog) -> Vec<ScoredCandidate<'a>> {
        Self::rank_models(req, catalog.all())
    }

    pub fn rank_models<'a>(
        req: &UserRequirement,
        models: &'a [ModelSpec],
    ) -> Vec<ScoredCandidate<'a>> {
        let weights = weights_for(req.priority);
        let mut excluded = 0usize;

        let mut ranked: Vec<ScoredCandidate<'a>> = Vec::with_capacity(models.len());
        for model in models {
            match evaluate(model, req) {
                Evaluation::OverBudget => {
                    excluded += 1;
                    tracing::debug!(
                        model = %model.name,
                        cost_input = model.cost_input_per_1m,
                        budget = req.budget,
                        "excluded: over budget"
                    );
                }
                Evaluation::Fit(fit) => ranked.push(ScoredCandidate {
                    model,
                    fit_breakdown: fit,
                    composite_score: composite_score(&weights, &fit),
                    explanation: String::new(),
                }),
            }
        }

        ranked.sort_by(compare);

        tracing::debug!(
            ranked = ranked.len(),
            excluded,
            priority = %req.priority,
            "ranking complete"
        );
        ranked
    }
}

/// `round(100 × Σ weight × fit)`, always within [0, 100].
pub fn composite_score(weights: &Weights, fit: &FitBreakdown) -> u8 {
    let raw = (100.0 * weights.combine(fit)).round();
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0) as u8
}

fn compare(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.composite_score
        .cmp(&a.composite_score)
        .then_with(|| {
            a.model
                .cost_input_per_1m
                .total_cmp(&b.model.cost_input_per_1m)
        })
        .then_with(|| a.model.name.cmp(&b.model.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Deployment, LatencyClass, TaskType};
    use crate::requirement::{ContextLength, Priority};

    fn model(name: &str, cost: f64, code: f64) -> ModelSpec {
        ModelSpec {
            name: name.into(),
            provider: "p".into(),
            cost_input_per_1m: cost,
            cost_output_per_1m: cost,
            context_window: 128_000,
            latency_class: LatencyClass::Realtime,
            deployment: Deployment::Cloud,
            task_scores: TaskType::ALL
                .into_iter()
                .map(|t| (t, if t == TaskType::Code { code } else { 0.5 }))
                .collect(),
            tags: vec![],
            link: String::new(),
        }
    }

    fn req(budget: f64, priority: Priority) -> UserRequirement {
        UserRequirement {
            task_type: TaskType::Code,
            budget,
            latency: LatencyClass::Realtime,
            context_length: ContextLength::K32,
            deployment: Deployment::Cloud,
            priority,
        }
    }

    #[test]
    fn test_composite_score_bounds() {
        let w = weights_for(Priority::Balanced);
        let zero = FitBreakdown {
            task: 0.0,
            cost: 0.0,
            latency: 0.0,
            context: 0.0,
            deployment: 0.0,
        };
        let one = FitBreakdown {
            task: 1.0,
            cost: 1.0,
            latency: 1.0,
            context: 1.0,
            deployment: 1.0,
        };
        assert_eq!(composite_score(&w, &zero), 0);
        assert_eq!(composite_score(&w, &one), 100);
    }

    #[test]
    fn test_ties_break_on_cost_then_name() {
        let models = vec![model("b", 1.0, 0.8), model("a", 1.0, 0.8)];
        let ranked = ScoringEngine::rank_models(&req(1000.0, Priority::Intelligence), &models);
        let names: Vec<&str> = ranked.iter().map(|c| c.model.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);

        let models = vec![model("x", 2.0, 0.8), model("y", 1.0, 0.8)];
        let ranked = ScoringEngine::rank_models(&req(1000.0, Priority::Intelligence), &models);
        assert_eq!(ranked[0].composite_score, ranked[1].composite_score);
        assert_eq!(ranked[0].model.name, "y");
    }

    #[test]
    fn test_all_excluded_returns_empty() {
        let models = vec![model("a", 10.0, 0.9), model("b", 20.0, 0.9)];
        assert!(ScoringEngine::rank_models(&req(5.0, Priority::Cost), &models).is_empty());
    }

    #[test]
    fn test_higher_score_ranks_first() {
        let models = vec![model("weak", 1.0, 0.2), model("strong", 1.0, 0.95)];
        let ranked = ScoringEngine::rank_models(&req(10.0, Priority::Intelligence), &models);
        assert_eq!(ranked[0].model.name, "strong");
        assert!(ranked[0].composite_score > ranked[1].composite_score);
        assert!(ranked.iter().all(|c| c.explanation.is_empty()));
    }
}

use serde::{Serialize, Serializer};

use crate::catalog::{Deployment, LatencyClass, TaskType};
use crate::scoring::ScoredCandidate;

/// Outcome of one successful recommendation. Borrows model specs from the
/// catalog, so it lives no longer than the `Recommender` that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationResult<'a> {
    pub task_type: TaskType,
    pub top_pick: ScoredCandidate<'a>,
    pub alternatives: Vec<ScoredCandidate<'a>>,
    pub ml_prediction: Option<String>,
    /// True iff `ml_prediction` names the top pick.
    pub is_ml_pick: bool,
}

/// Flattened wire shape of a ranked model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelScore<'a> {
    pub name: &'a str,
    pub provider: &'a str,
    pub score: u8,
    pub explanation: &'a str,
    pub cost_input: f64,
    pub cost_output: f64,
    pub context_window: u64,
    pub latency_class: LatencyClass,
    pub deployment: Deployment,
    pub tags: &'a [String],
    pub link: &'a str,
    /// The model's rating for the requested task, two decimals.
    pub task_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPick<'a> {
    #[serde(flatten)]
    pub model: ModelScore<'a>,
    pub is_ml_pick: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendResponse<'a> {
    pub top_pick: TopPick<'a>,
    pub alternatives: Vec<ModelScore<'a>>,
    pub ml_prediction: Option<&'a str>,
}

impl<'a> RecommendationResult<'a> {
    pub fn response(&self) -> RecommendResponse<'_> {
        RecommendResponse {
            top_pick: TopPick {
                model: model_score(&self.top_pick, self.task_type),
                is_ml_pick: self.is_ml_pick,
            },
            alternatives: self
                .alternatives
                .iter()
                .map(|c| model_score(c, self.task_type))
                .collect(),
            ml_prediction: self.ml_prediction.as_deref(),
        }
    }
}

impl Serialize for RecommendationResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.response().serialize(serializer)
    }
}

fn model_score<'r>(c: &'r ScoredCandidate<'_>, task: TaskType) -> ModelScore<'r> {
    let m = c.model;
    ModelScore {
        name: &m.name,
        provider: &m.provider,
        score: c.composite_score,
        explanation: &c.explanation,
        cost_input: m.cost_input_per_1m,
        cost_output: m.cost_output_per_1m,
        context_window: m.context_window,
        latency_class: m.latency_class,
        deployment: m.deployment,
        tags: &m.tags,
        link: &m.link,
        task_score: (m.task_score(task) * 100.0).round() / 100.0,
    }
}

use crate::requirement::UserRequirement;

pub const FEATURE_COUNT: usize = 6;

/// Column order of [`encode`].
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "task_type",
    "budget",
    "latency",
    "context_tokens",
    "deployment",
    "priority",
];

/// Index of the budget column, the only continuous feature.
pub const BUDGET_FEATURE: usize = 1;

pub type Features = [f64; FEATURE_COUNT];

/// Ordinal encoding shared by training and prediction.
pub fn encode(req: &UserRequirement) -> Features {
    [
        req.task_type.index() as f64,
        req.budget,
        req.latency.index() as f64,
        req.min_context_tokens() as f64,
        req.deployment.index() as f64,
        req.priority.index() as f64,
    ]
}

use serde::Serialize;

use crate::catalog::{Deployment, ModelSpec};
use crate::requirement::UserRequirement;

/// Scoring criteria, in the fixed order used for tie-breaking and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Task,
    Cost,
    Latency,
    Context,
    Deployment,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Task,
        Criterion::Cost,
        Criterion::Latency,
        Criterion::Context,
        Criterion::Deployment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Task => "task",
            Criterion::Cost => "cost",
            Criterion::Latency => "latency",
            Criterion::Context => "context",
            Criterion::Deployment => "deployment",
        }
    }
}

/// Per-criterion fit values, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitBreakdown {
    pub task: f64,
    pub cost: f64,
    pub latency: f64,
    pub context: f64,
    pub deployment: f64,
}

impl FitBreakdown {
    pub fn get(&self, c: Criterion) -> f64 {
        match c {
            Criterion::Task => self.task,
            Criterion::Cost => self.cost,
            Criterion::Latency => self.latency,
            Criterion::Context => self.context,
            Criterion::Deployment => self.deployment,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Outcome of evaluating one model: either excluded by the budget or scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    OverBudget,
    Fit(FitBreakdown),
}

/// Hard constraint: input cost per 1M tokens must not exceed the budget.
pub fn within_budget(model: &ModelSpec, req: &UserRequirement) -> bool {
    model.cost_input_per_1m <= req.budget
}

pub fn evaluate(model: &ModelSpec, req: &UserRequirement) -> Evaluation {
    if !within_budget(model, req) {
        return Evaluation::OverBudget;
    }
    Evaluation::Fit(breakdown(model, req))
}

/// Raw breakdown regardless of the budget constraint (cost fit is 0 when over).
pub fn breakdown(model: &ModelSpec, req: &UserRequirement) -> FitBreakdown {
    FitBreakdown {
        task: clamp01(model.task_score(req.task_type)),
        cost: cost_fit(model.cost_input_per_1m, req.budget),
        latency: latency_fit(model, req),
        context: context_fit(model.context_window, req.min_context_tokens()),
        deployment: deployment_fit(model.deployment, req.deployment),
    }
}

pub fn cost_fit(cost_input_per_1m: f64, budget: f64) -> f64 {
    if budget <= 0.0 || cost_input_per_1m > budget {
        return 0.0;
    }
    clamp01(1.0 - cost_input_per_1m / budget)
}

fn latency_fit(model: &ModelSpec, req: &UserRequirement) -> f64 {
    match model.latency_class.distance(req.latency) {
        0 => 1.0,
        1 => 0.5,
        _ => 0.0,
    }
}

pub fn context_fit(context_window: u64, required: u64) -> f64 {
    if context_window >= required {
        return 1.0;
    }
    clamp01(context_window as f64 / required as f64)
}

fn deployment_fit(model: Deployment, wanted: Deployment) -> f64 {
    if wanted == Deployment::Both || model == wanted || model == Deployment::Both {
        1.0
    } else {
        0.0
    }
}

fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

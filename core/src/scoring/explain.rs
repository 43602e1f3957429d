//! Template-driven justification for a ranked candidate.
//!
//! The two criteria contributing most (`weight × fit`) and the one contributing
//! least are named, each with the concrete model attribute behind it.

use crate::catalog::ModelSpec;
use crate::requirement::UserRequirement;

use super::engine::ScoredCandidate;
use super::fit::Criterion;
use super::weights::weights_for;

pub fn explain(candidate: &ScoredCandidate<'_>, req: &UserRequirement) -> String {
    let ranked = ranked_criteria(candidate, req);
    let (first, second, weakest) = (ranked[0], ranked[1], ranked[ranked.len() - 1]);
    let m = candidate.model;

    format!(
        "{} scores {}/100. Strongest on {} and {}. Weakest on {}.",
        m.name,
        candidate.composite_score,
        phrase(first, m, req),
        phrase(second, m, req),
        phrase(weakest, m, req),
    )
}

/// Criteria ordered by weighted contribution, highest first. Equal
/// contributions keep the fixed criterion order.
pub fn ranked_criteria(candidate: &ScoredCandidate<'_>, req: &UserRequirement) -> Vec<Criterion> {
    let weights = weights_for(req.priority);
    let mut items: Vec<(Criterion, f64)> = Criterion::ALL
        .into_iter()
        .map(|c| (c, weights.contribution(&candidate.fit_breakdown, c)))
        .collect();
    items.sort_by(|a, b| b.1.total_cmp(&a.1));
    items.into_iter().map(|(c, _)| c).collect()
}

fn phrase(c: Criterion, m: &ModelSpec, req: &UserRequirement) -> String {
    match c {
        Criterion::Task => format!(
            "{} capability (rated {:.2} for {} tasks)",
            req.task_type,
            m.task_score(req.task_type),
            req.task_type
        ),
        Criterion::Cost => format!(
            "cost (${} per 1M input tokens against a ${} budget)",
            money(m.cost_input_per_1m),
            money(req.budget)
        ),
        Criterion::Latency => format!(
            "latency ({} response class for a {} requirement)",
            m.latency_class, req.latency
        ),
        Criterion::Context => format!(
            "context ({} token window, {} needed)",
            compact_tokens(m.context_window),
            compact_tokens(req.min_context_tokens())
        ),
        Criterion::Deployment => format!(
            "deployment ({} availability for a {} target)",
            m.deployment, req.deployment
        ),
    }
}

/// Two decimals, or three for sub-dime rates so they don't collapse to 0.0x.
fn money(v: f64) -> String {
    if v > 0.0 && v < 0.1 {
        format!("{v:.3}")
    } else {
        format!("{v:.2}")
    }
}

/// `2000000` → `2M`, `128000` → `128k`, `512` → `512`.
pub fn compact_tokens(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{}M", n / 1_000_000)
    } else if n >= 1_000 {
        format!("{}k", n / 1_000)
    } else {
        n.to_string()
    }
}

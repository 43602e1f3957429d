use serde::Serialize;

use crate::requirement::Priority;

use super::fit::{Criterion, FitBreakdown};

/// Combination weights for the five criteria; each set sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub task: f64,
    pub cost: f64,
    pub latency: f64,
    pub context: f64,
    pub deployment: f64,
}

const COST: Weights = Weights {
    task: 0.15,
    cost: 0.55,
    latency: 0.10,
    context: 0.10,
    deployment: 0.10,
};

const SPEED: Weights = Weights {
    task: 0.15,
    cost: 0.10,
    latency: 0.55,
    context: 0.10,
    deployment: 0.10,
};

const INTELLIGENCE: Weights = Weights {
    task: 0.55,
    cost: 0.10,
    latency: 0.10,
    context: 0.15,
    deployment: 0.10,
};

const BALANCED: Weights = Weights {
    task: 0.30,
    cost: 0.20,
    latency: 0.20,
    context: 0.20,
    deployment: 0.10,
};

pub fn weights_for(priority: Priority) -> Weights {
    match priority {
        Priority::Cost => COST,
        Priority::Speed => SPEED,
        Priority::Intelligence => INTELLIGENCE,
        Priority::Balanced => BALANCED,
    }
}

impl Weights {
    pub fn get(&self, c: Criterion) -> f64 {
        match c {
            Criterion::Task => self.task,
            Criterion::Cost => self.cost,
            Criterion::Latency => self.latency,
            Criterion::Context => self.context,
            Criterion::Deployment => self.deployment,
        }
    }

    pub fn sum(&self) -> f64 {
        Criterion::ALL.into_iter().map(|c| self.get(c)).sum()
    }

    /// `weight × fit` for one criterion.
    pub fn contribution(&self, fit: &FitBreakdown, c: Criterion) -> f64 {
        self.get(c) * fit.get(c)
    }

    /// Weighted aggregate in [0, 1].
    pub fn combine(&self, fit: &FitBreakdown) -> f64 {
        Criterion::ALL
            .into_iter()
            .map(|c| self.contribution(fit, c))
            .sum()
    }
}

//! User requirement profile: the raw wire shape and its validated form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Deployment, LatencyClass, TaskType};
use crate::error::RecommendError;

/// Which criterion dominates the weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Cost,
    Speed,
    Intelligence,
    Balanced,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Cost,
        Priority::Speed,
        Priority::Intelligence,
        Priority::Balanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Cost => "cost",
            Priority::Speed => "speed",
            Priority::Intelligence => "intelligence",
            Priority::Balanced => "balanced",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum context the user needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextLength {
    #[serde(rename = "4k")]
    K4,
    #[serde(rename = "32k")]
    K32,
    #[serde(rename = "128k")]
    K128,
    #[serde(rename = "200k")]
    K200,
}

impl ContextLength {
    pub const ALL: [ContextLength; 4] = [
        ContextLength::K4,
        ContextLength::K32,
        ContextLength::K128,
        ContextLength::K200,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContextLength::K4 => "4k",
            ContextLength::K32 => "32k",
            ContextLength::K128 => "128k",
            ContextLength::K200 => "200k",
        }
    }

    pub fn min_tokens(self) -> u64 {
        match self {
            ContextLength::K4 => 4_000,
            ContextLength::K32 => 32_000,
            ContextLength::K128 => 128_000,
            ContextLength::K200 => 200_000,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for ContextLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirement exactly as a caller sends it; nothing is checked yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementInput {
    pub task_type: String,
    pub budget: f64,
    pub latency: String,
    pub context_length: String,
    pub deployment: String,
    pub priority: String,
}

/// A requirement whose every field lies inside its declared domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserRequirement {
    pub task_type: TaskType,
    pub budget: f64,
    pub latency: LatencyClass,
    pub context_length: ContextLength,
    pub deployment: Deployment,
    pub priority: Priority,
}

impl UserRequirement {
    pub fn min_context_tokens(&self) -> u64 {
        self.context_length.min_tokens()
    }
}

impl TryFrom<&RequirementInput> for UserRequirement {
    type Error = RecommendError;

    fn try_from(input: &RequirementInput) -> Result<Self, Self::Error> {
        let task_type = field(
            "task_type",
            &input.task_type,
            TaskType::parse,
            &TaskType::ALL.map(TaskType::as_str),
        )?;
        let latency = field(
            "latency",
            &input.latency,
            LatencyClass::parse,
            &LatencyClass::ALL.map(LatencyClass::as_str),
        )?;
        let context_length = field(
            "context_length",
            &input.context_length,
            ContextLength::parse,
            &ContextLength::ALL.map(ContextLength::as_str),
        )?;
        let deployment = field(
            "deployment",
            &input.deployment,
            Deployment::parse,
            &Deployment::ALL.map(Deployment::as_str),
        )?;
        let priority = field(
            "priority",
            &input.priority,
            Priority::parse,
            &Priority::ALL.map(Priority::as_str),
        )?;

        if !input.budget.is_finite() || input.budget <= 0.0 {
            return Err(RecommendError::InvalidRequirement(format!(
                "budget must be a positive number (got {})",
                input.budget
            )));
        }

        Ok(Self {
            task_type,
            budget: input.budget,
            latency,
            context_length,
            deployment,
            priority,
        })
    }
}

impl From<&UserRequirement> for RequirementInput {
    fn from(req: &UserRequirement) -> Self {
        Self {
            task_type: req.task_type.as_str().to_string(),
            budget: req.budget,
            latency: req.latency.as_str().to_string(),
            context_length: req.context_length.as_str().to_string(),
            deployment: req.deployment.as_str().to_string(),
            priority: req.priority.as_str().to_string(),
        }
    }
}

fn field<T>(
    name: &str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
    allowed: &[&str],
) -> Result<T, RecommendError> {
    parse(value).ok_or_else(|| {
        RecommendError::InvalidRequirement(format!(
            "{name} '{value}' is not one of: {}",
            allowed.join(", ")
        ))
    })
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Workload a model is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Code,
    Chat,
    Summarize,
    Analysis,
    Translation,
    Rag,
}

impl TaskType {
    pub const ALL: [TaskType; 6] = [
        TaskType::Code,
        TaskType::Chat,
        TaskType::Summarize,
        TaskType::Analysis,
        TaskType::Translation,
        TaskType::Rag,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Code => "code",
            TaskType::Chat => "chat",
            TaskType::Summarize => "summarize",
            TaskType::Analysis => "analysis",
            TaskType::Translation => "translation",
            TaskType::Rag => "rag",
        }
    }

    /// Position in [`TaskType::ALL`], used as the ordinal feature encoding.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Response-time class, ordered realtime < moderate < batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatencyClass {
    Realtime,
    Moderate,
    Batch,
}

impl LatencyClass {
    pub const ALL: [LatencyClass; 3] = [
        LatencyClass::Realtime,
        LatencyClass::Moderate,
        LatencyClass::Batch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LatencyClass::Realtime => "realtime",
            LatencyClass::Moderate => "moderate",
            LatencyClass::Batch => "batch",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of steps between two classes on the ordinal scale.
    pub fn distance(self, other: LatencyClass) -> usize {
        self.index().abs_diff(other.index())
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    Cloud,
    Local,
    Both,
}

impl Deployment {
    pub const ALL: [Deployment; 3] = [Deployment::Cloud, Deployment::Local, Deployment::Both];

    pub fn as_str(self) -> &'static str {
        match self {
            Deployment::Cloud => "cloud",
            Deployment::Local => "local",
            Deployment::Both => "both",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(TaskType, LatencyClass, Deployment);

/// One catalog entry. Field names follow the knowledge-base JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub name: String,
    pub provider: String,
    pub cost_input_per_1m: f64,
    pub cost_output_per_1m: f64,
    pub context_window: u64,
    pub latency_class: LatencyClass,
    pub deployment: Deployment,
    pub task_scores: BTreeMap<TaskType, f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: String,
}

impl ModelSpec {
    /// Fitness for `task`. Catalog validation guarantees every task is present.
    pub fn task_score(&self, task: TaskType) -> f64 {
        self.task_scores.get(&task).copied().unwrap_or(0.0)
    }
}

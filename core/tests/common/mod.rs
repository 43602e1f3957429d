#![allow(dead_code)]

use llmmatch_core::api::{
    ContextLength, Deployment, LatencyClass, ModelSpec, Priority, TaskType, UserRequirement,
};

pub fn spec(
    name: &str,
    cost_input: f64,
    context_window: u64,
    code: f64,
    latency: LatencyClass,
    deployment: Deployment,
) -> ModelSpec {
    ModelSpec {
        name: name.to_string(),
        provider: "test".to_string(),
        cost_input_per_1m: cost_input,
        cost_output_per_1m: cost_input * 4.0,
        context_window,
        latency_class: latency,
        deployment,
        task_scores: TaskType::ALL
            .into_iter()
            .map(|t| (t, if t == TaskType::Code { code } else { 0.6 }))
            .collect(),
        tags: vec![],
        link: format!("https://example.com/{name}"),
    }
}

/// Model A: cheap, realtime, 128k window, code 0.9.
pub fn model_a() -> ModelSpec {
    spec(
        "A",
        2.0,
        128_000,
        0.9,
        LatencyClass::Realtime,
        Deployment::Cloud,
    )
}

/// Model B: expensive, moderate, 200k window, code 0.95.
pub fn model_b() -> ModelSpec {
    spec(
        "B",
        20.0,
        200_000,
        0.95,
        LatencyClass::Moderate,
        Deployment::Cloud,
    )
}

pub fn code_requirement(budget: f64, priority: Priority) -> UserRequirement {
    UserRequirement {
        task_type: TaskType::Code,
        budget,
        latency: LatencyClass::Realtime,
        context_length: ContextLength::K128,
        deployment: Deployment::Cloud,
        priority,
    }
}

/// Every enumerated requirement combination at the given budget.
pub fn all_requirements(budget: f64) -> Vec<UserRequirement> {
    let mut out = Vec::new();
    for task_type in TaskType::ALL {
        for latency in LatencyClass::ALL {
            for context_length in ContextLength::ALL {
                for deployment in Deployment::ALL {
                    for priority in Priority::ALL {
                        out.push(UserRequirement {
                            task_type,
                            budget,
                            latency,
                            context_length,
                            deployment,
                            priority,
                        });
                    }
                }
            }
        }
    }
    out
}

use llmmatch_core::api::{AppConfig, CliError, Recommender, RequirementInput};
use llmmatch_plugins::factory::{build_catalog, build_recommender};

use super::cli::{ModelsArgs, RecommendArgs};
use super::write_line;

impl From<&RecommendArgs> for RequirementInput {
    fn from(args: &RecommendArgs) -> Self {
        RequirementInput {
            task_type: args.task_type.clone(),
            budget: args.budget,
            latency: args.latency.clone(),
            context_length: args.context_length.clone(),
            deployment: args.deployment.clone(),
            priority: args.priority.clone(),
        }
    }
}

pub fn handle_recommend(args: &RecommendArgs, cfg: &AppConfig) -> Result<i32, CliError> {
    let recommender = build_recommender(cfg)?;
    let json = render_recommendation(&recommender, args)?;
    write_line(&mut std::io::stdout().lock(), &json)?;
    Ok(0)
}

/// JSON for one recommendation, in the same shape `/api/recommend` returns.
pub fn render_recommendation(
    recommender: &Recommender,
    args: &RecommendArgs,
) -> Result<String, CliError> {
    let result = recommender.recommend(&RequirementInput::from(args))?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    json.map_err(|e| CliError::Command(format!("serialize recommendation: {e}")))
}

pub fn handle_models(args: &ModelsArgs, cfg: &AppConfig) -> Result<i32, CliError> {
    let catalog = build_catalog(&cfg.catalog)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(catalog.all())
    } else {
        serde_json::to_string(catalog.all())
    };
    let json = json.map_err(|e| CliError::Command(format!("serialize catalog: {e}")))?;
    write_line(&mut std::io::stdout().lock(), &json)?;
    Ok(0)
}

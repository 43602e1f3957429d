use std::path::PathBuf;

use llmmatch_core::api::{AppConfig, CliError, MlConfig};
use llmmatch_plugins::factory::build_catalog;
use llmmatch_plugins::predictor::train;

use super::cli::TrainArgs;
use super::write_line;

/// Train against the configured catalog and write the artifact. Unlike server
/// startup, a training failure here is an error.
pub fn handle_train(args: &TrainArgs, cfg: &AppConfig) -> Result<i32, CliError> {
    let ml = train_config(args, &cfg.ml);
    let out = args
        .out
        .as_deref()
        .or(ml.artifact_path.as_deref())
        .map(PathBuf::from)
        .ok_or_else(|| {
            CliError::Config("no artifact path: pass --out or set [ml] artifact_path".into())
        })?;

    let catalog = build_catalog(&cfg.catalog)?;
    let artifact = train(&catalog, &ml)?;
    artifact.save(&out)?;

    tracing::info!(path = %out.display(), samples = artifact.samples, "artifact written");
    write_line(&mut std::io::stdout().lock(), &out.display().to_string())?;
    Ok(0)
}

fn train_config(args: &TrainArgs, base: &MlConfig) -> MlConfig {
    let mut ml = base.clone();
    if let Some(samples) = args.samples {
        ml.samples = samples;
    }
    if let Some(seed) = args.seed {
        ml.seed = seed;
    }
    ml
}

use std::path::Path;
use std::sync::Arc;

use llmmatch_core::api::{
    AppConfig, Catalog, CatalogConfig, CatalogError, MlConfig, ModelPredictor, Recommender,
};

use crate::predictor::{train, TreeArtifact};

pub fn build_catalog(cfg: &CatalogConfig) -> Result<Catalog, CatalogError> {
    let catalog = match cfg.path.as_deref().filter(|p| !p.trim().is_empty()) {
        Some(path) => Catalog::from_path(Path::new(path))?,
        None => Catalog::builtin()?,
    };
    tracing::info!(
        source = cfg.path.as_deref().unwrap_or("builtin"),
        models = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Load the persisted confirmation model, retraining when it is missing or was
/// trained on a different catalog and `train_if_missing` allows it. Every
/// failure here degrades to running without ML.
pub fn build_predictor(cfg: &MlConfig, catalog: &Catalog) -> Option<Arc<dyn ModelPredictor>> {
    if !cfg.enabled {
        tracing::info!("ML confirmation disabled");
        return None;
    }

    let path = cfg
        .artifact_path
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(Path::new);

    if let Some(path) = path {
        match TreeArtifact::load(path) {
            Ok(artifact) if artifact.matches(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    trained_at = %artifact.trained_at,
                    samples = artifact.samples,
                    "confirmation model loaded"
                );
                return Some(Arc::new(artifact.into_predictor()));
            }
            Ok(_) => {
                tracing::warn!(path = %path.display(), "confirmation model was trained on a different catalog");
            }
            Err(e) => {
                tracing::info!(error = %e, "no usable confirmation model");
            }
        }
    }

    if !cfg.train_if_missing {
        tracing::warn!("running without ML confirmation (train_if_missing = false)");
        return None;
    }

    let artifact = match train(catalog, cfg) {
        Ok(a) => a,
        Err(e) => {
            tracing::warn!(error = %e, "training confirmation model failed; running without ML");
            return None;
        }
    };

    if let Some(path) = path {
        match artifact.save(path) {
            Ok(()) => tracing::info!(path = %path.display(), "confirmation model saved"),
            Err(e) => tracing::warn!(error = %e, "could not persist confirmation model"),
        }
    }

    Some(Arc::new(artifact.into_predictor()))
}

/// Startup gate: config, then catalog, then predictor.
pub fn build_recommender(cfg: &AppConfig) -> Result<Recommender, CatalogError> {
    let catalog = build_catalog(&cfg.catalog)?;
    let predictor = build_predictor(&cfg.ml, &catalog);
    Ok(Recommender::new(Arc::new(catalog), predictor, &cfg.recommend))
}

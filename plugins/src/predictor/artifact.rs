use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use llmmatch_core::api::Catalog;

use super::tree::{DecisionTree, DecisionTreePredictor};

pub const ARTIFACT_VERSION: u32 = 1;

/// Persisted confirmation model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeArtifact {
    pub version: u32,
    pub trained_at: DateTime<Utc>,
    /// [`catalog_fingerprint`] of the catalog the labels came from.
    pub catalog_fingerprint: String,
    pub samples: usize,
    pub seed: u64,
    pub budget_range: [f64; 2],
    pub tree: DecisionTree,
}

impl TreeArtifact {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read confirmation model {}", path.display()))?;
        let artifact: TreeArtifact = serde_json::from_str(&s)
            .with_context(|| format!("parse confirmation model {}", path.display()))?;
        if artifact.version != ARTIFACT_VERSION {
            anyhow::bail!(
                "{}: artifact version {} (expected {ARTIFACT_VERSION})",
                path.display(),
                artifact.version
            );
        }
        Ok(artifact)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    /// True when this artifact was trained on exactly `catalog`.
    pub fn matches(&self, catalog: &Catalog) -> bool {
        self.catalog_fingerprint == catalog_fingerprint(catalog)
    }

    pub fn into_predictor(self) -> DecisionTreePredictor {
        let [min, max] = self.budget_range;
        DecisionTreePredictor::new(self.tree, (min, max))
    }
}

/// SHA-256 over the catalog's models in name order, hex encoded. Any change to
/// a model's attributes changes the fingerprint; reordering the file does not.
pub fn catalog_fingerprint(catalog: &Catalog) -> String {
    let mut models: Vec<_> = catalog.all().iter().collect();
    models.sort_by(|a, b| a.name.cmp(&b.name));

    let mut hasher = Sha256::new();
    for m in models {
        // ModelSpec holds only strings, numbers and ordered maps.
        if let Ok(bytes) = serde_json::to_vec(m) {
            hasher.update(&bytes);
        }
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}

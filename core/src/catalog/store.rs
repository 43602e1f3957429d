use std::collections::HashSet;
use std::path::Path;

use crate::error::CatalogError;

use super::types::{ModelSpec, TaskType};

const BUILTIN_CATALOG: &str = include_str!("../../data/models.json");

/// Immutable registry of candidate models.
///
/// Built once at startup and shared by reference (usually behind an `Arc`)
/// with every request. There is no way to mutate it after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    models: Vec<ModelSpec>,
}

impl Catalog {
    /// The 20-model catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(s: &str) -> Result<Self, CatalogError> {
        let models: Vec<ModelSpec> = serde_json::from_str(s)?;
        Self::from_models(models)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let s = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&s)
    }

    /// Validate every entry; the first violation aborts the load.
    pub fn from_models(models: Vec<ModelSpec>) -> Result<Self, CatalogError> {
        if models.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for (index, m) in models.iter().enumerate() {
            if m.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !seen.insert(m.name.as_str()) {
                return Err(CatalogError::DuplicateName(m.name.clone()));
            }
            validate_model(m)?;
        }

        tracing::debug!(models = models.len(), "catalog validated");
        Ok(Self { models })
    }

    pub fn all(&self) -> &[ModelSpec] {
        &self.models
    }

    pub fn by_name(&self, name: &str) -> Result<&ModelSpec, CatalogError> {
        self.models
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.iter().any(|m| m.name == name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

fn validate_model(m: &ModelSpec) -> Result<(), CatalogError> {
    for (field, value) in [
        ("cost_input_per_1m", m.cost_input_per_1m),
        ("cost_output_per_1m", m.cost_output_per_1m),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(CatalogError::InvalidNumber {
                model: m.name.clone(),
                field,
                value,
            });
        }
    }

    if m.context_window == 0 {
        return Err(CatalogError::ZeroContextWindow {
            model: m.name.clone(),
        });
    }

    for task in TaskType::ALL {
        let Some(&value) = m.task_scores.get(&task) else {
            return Err(CatalogError::MissingTaskScore {
                model: m.name.clone(),
                task: task.as_str(),
            });
        };
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(CatalogError::TaskScoreOutOfRange {
                model: m.name.clone(),
                task: task.as_str(),
                value,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Deployment, LatencyClass};
    use std::io::Write;

    fn model(name: &str) -> ModelSpec {
        ModelSpec {
            name: name.to_string(),
            provider: "Acme".into(),
            cost_input_per_1m: 1.0,
            cost_output_per_1m: 2.0,
            context_window: 8000,
            latency_class: LatencyClass::Moderate,
            deployment: Deployment::Cloud,
            task_scores: TaskType::ALL.into_iter().map(|t| (t, 0.5)).collect(),
            tags: vec![],
            link: String::new(),
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 20);
        assert!(catalog.by_name("GPT-4o").is_ok());
        assert!(matches!(
            catalog.by_name("nope"),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn test_rejects_missing_task_score() {
        let mut m = model("a");
        m.task_scores.remove(&TaskType::Rag);
        let err = Catalog::from_models(vec![m]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingTaskScore { task: "rag", .. }
        ));
    }

    #[test]
    fn test_rejects_out_of_range_task_score() {
        let mut m = model("a");
        m.task_scores.insert(TaskType::Code, 1.2);
        let err = Catalog::from_models(vec![m]).unwrap_err();
        assert!(matches!(err, CatalogError::TaskScoreOutOfRange { .. }));
    }

    #[test]
    fn test_rejects_negative_and_non_finite_costs() {
        let mut m = model("a");
        m.cost_input_per_1m = -1.0;
        assert!(matches!(
            Catalog::from_models(vec![m]).unwrap_err(),
            CatalogError::InvalidNumber {
                field: "cost_input_per_1m",
                ..
            }
        ));

        let mut m = model("b");
        m.cost_output_per_1m = f64::NAN;
        assert!(matches!(
            Catalog::from_models(vec![m]).unwrap_err(),
            CatalogError::InvalidNumber {
                field: "cost_output_per_1m",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_duplicates_empty_and_zero_context() {
        assert!(matches!(
            Catalog::from_models(vec![model("a"), model("a")]).unwrap_err(),
            CatalogError::DuplicateName(_)
        ));
        assert!(matches!(
            Catalog::from_models(vec![]).unwrap_err(),
            CatalogError::Empty
        ));
        let mut m = model("a");
        m.context_window = 0;
        assert!(matches!(
            Catalog::from_models(vec![m]).unwrap_err(),
            CatalogError::ZeroContextWindow { .. }
        ));
    }

    #[test]
    fn test_rejects_unknown_task_key() {
        let json = r#"[{"name":"a","provider":"p","cost_input_per_1m":1,"cost_output_per_1m":1,
            "context_window":1000,"latency_class":"batch","deployment":"cloud",
            "task_scores":{"poetry":0.5}}]"#;
        assert!(matches!(
            Catalog::from_json(json).unwrap_err(),
            CatalogError::Parse(_)
        ));
    }

    #[test]
    fn test_from_path() {
        let models: Vec<ModelSpec> = vec![model("a"), model("b")];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&models).unwrap().as_bytes())
            .unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let missing = Catalog::from_path(Path::new("/definitely/not/here.json"));
        assert!(matches!(missing, Err(CatalogError::Io { .. })));
    }
}

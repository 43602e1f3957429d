use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use llmmatch_core::api::{
    encode, Catalog, ContextLength, Deployment, Features, LatencyClass, MlConfig, Priority,
    ScoringEngine, TaskType, UserRequirement,
};

use super::artifact::{catalog_fingerprint, TreeArtifact, ARTIFACT_VERSION};
use super::tree::{DecisionTree, TreeParams};

/// Budget interval synthetic requirements are drawn from; also the range the
/// fitted predictor accepts.
pub const BUDGET_RANGE: (f64, f64) = (0.1, 100.0);

/// Labelled synthetic requirements. `targets[i]` indexes into `classes`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub rows: Vec<Features>,
    pub targets: Vec<usize>,
    pub classes: Vec<String>,
    /// Draws whose ranking came back empty.
    pub skipped: usize,
}

fn pick<T: Copy, const N: usize>(rng: &mut StdRng, all: [T; N]) -> T {
    all[rng.gen_range(0..N)]
}

pub fn random_requirement(rng: &mut StdRng) -> UserRequirement {
    UserRequirement {
        task_type: pick(rng, TaskType::ALL),
        budget: rng.gen_range(BUDGET_RANGE.0..BUDGET_RANGE.1),
        latency: pick(rng, LatencyClass::ALL),
        context_length: pick(rng, ContextLength::ALL),
        deployment: pick(rng, Deployment::ALL),
        priority: pick(rng, Priority::ALL),
    }
}

/// Draw `samples` requirements from a seeded RNG and label each with the
/// scoring engine's top pick.
pub fn synthesize(catalog: &Catalog, samples: usize, seed: u64) -> TrainingSet {
    let mut classes: Vec<String> = catalog.all().iter().map(|m| m.name.clone()).collect();
    classes.sort();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut set = TrainingSet {
        rows: Vec::with_capacity(samples),
        targets: Vec::with_capacity(samples),
        classes,
        skipped: 0,
    };

    for _ in 0..samples {
        let req = random_requirement(&mut rng);
        let ranked = ScoringEngine::rank(&req, catalog);
        let Some(top) = ranked.first() else {
            set.skipped += 1;
            continue;
        };
        let Ok(target) = set.classes.binary_search(&top.model.name) else {
            set.skipped += 1;
            continue;
        };
        set.rows.push(encode(&req));
        set.targets.push(target);
    }

    set
}

/// Fraction of rows the tree classifies as labelled.
pub fn accuracy(tree: &DecisionTree, rows: &[Features], targets: &[usize]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let hits = rows
        .iter()
        .zip(targets)
        .filter(|(x, &t)| tree.classify(x) == Some(t))
        .count();
    hits as f64 / rows.len() as f64
}

/// Synthesize, fit, and package a confirmation model for `catalog`.
pub fn train(catalog: &Catalog, cfg: &MlConfig) -> anyhow::Result<TreeArtifact> {
    let set = synthesize(catalog, cfg.samples, cfg.seed);
    if set.rows.is_empty() {
        anyhow::bail!(
            "no usable training samples ({} drawn, all excluded by budget)",
            cfg.samples
        );
    }

    let params = TreeParams {
        max_depth: cfg.max_depth,
        min_samples_split: cfg.min_samples_split,
    };
    let tree = DecisionTree::fit(&set.rows, &set.targets, set.classes.clone(), params)?;
    let fit = accuracy(&tree, &set.rows, &set.targets);

    tracing::info!(
        samples = set.rows.len(),
        skipped = set.skipped,
        seed = cfg.seed,
        depth = tree.depth(),
        leaves = tree.leaf_count(),
        training_accuracy = fit,
        "confirmation model trained"
    );

    Ok(TreeArtifact {
        version: ARTIFACT_VERSION,
        trained_at: chrono::Utc::now(),
        catalog_fingerprint: catalog_fingerprint(catalog),
        samples: set.rows.len(),
        seed: cfg.seed,
        budget_range: [BUDGET_RANGE.0, BUDGET_RANGE.1],
        tree,
    })
}

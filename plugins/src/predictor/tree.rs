use serde::{Deserialize, Serialize};

use llmmatch_core::api::{
    encode, Features, ModelPredictor, PredictError, UserRequirement, FEATURE_COUNT,
};
use llmmatch_core::predict::BUDGET_FEATURE;

/// Growth limits for [`DecisionTree::fit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: 16,
            min_samples_split: 2,
        }
    }
}

/// One node of the flattened tree. Children are indices into `DecisionTree::nodes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Leaf {
        class: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// CART classifier with gini impurity. Node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<Node>,
    pub classes: Vec<String>,
}

impl DecisionTree {
    /// Grow a tree over `rows`, where `targets[i]` indexes into `classes`.
    pub fn fit(
        rows: &[Features],
        targets: &[usize],
        classes: Vec<String>,
        params: TreeParams,
    ) -> anyhow::Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("cannot fit a decision tree on zero samples");
        }
        if rows.len() != targets.len() {
            anyhow::bail!(
                "{} feature rows but {} targets",
                rows.len(),
                targets.len()
            );
        }
        if let Some(bad) = targets.iter().find(|&&t| t >= classes.len()) {
            anyhow::bail!("target {bad} has no class label ({} classes)", classes.len());
        }

        let mut builder = Builder {
            rows,
            targets,
            n_classes: classes.len(),
            params,
            nodes: Vec::new(),
        };
        builder.grow((0..rows.len()).collect(), 0);

        Ok(Self {
            nodes: builder.nodes,
            classes,
        })
    }

    /// Class index for one feature row.
    pub fn classify(&self, x: &Features) -> Option<usize> {
        let mut at = 0;
        // A well-formed tree reaches a leaf in at most nodes.len() steps.
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(at)? {
                Node::Leaf { class } => return Some(*class),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    at = if x.get(*feature)? <= threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
        None
    }

    pub fn predict_label(&self, x: &Features) -> Option<&str> {
        self.classify(x)
            .and_then(|c| self.classes.get(c))
            .map(String::as_str)
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], at: usize) -> usize {
            match nodes.get(at) {
                Some(Node::Split { left, right, .. }) => {
                    1 + walk(nodes, *left).max(walk(nodes, *right))
                }
                _ => 0,
            }
        }
        walk(&self.nodes, 0)
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }
}

struct Builder<'a> {
    rows: &'a [Features],
    targets: &'a [usize],
    n_classes: usize,
    params: TreeParams,
    nodes: Vec<Node>,
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

impl Builder<'_> {
    fn grow(&mut self, idx: Vec<usize>, depth: usize) -> usize {
        let counts = self.class_counts(&idx);
        let impurity = gini(&counts, idx.len());

        let can_split = depth < self.params.max_depth
            && idx.len() >= self.params.min_samples_split.max(2)
            && impurity > 0.0;

        let split = if can_split {
            self.best_split(&idx)
                .filter(|s| s.impurity < impurity - f64::EPSILON)
        } else {
            None
        };

        let Some(split) = split else {
            self.nodes.push(Node::Leaf {
                class: majority(&counts),
            });
            return self.nodes.len() - 1;
        };

        let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = idx
            .into_iter()
            .partition(|&i| self.rows[i][split.feature] <= split.threshold);

        // Reserve the slot so the parent precedes its children.
        let at = self.nodes.len();
        self.nodes.push(Node::Leaf { class: 0 });
        let left = self.grow(left_idx, depth + 1);
        let right = self.grow(right_idx, depth + 1);
        self.nodes[at] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        at
    }

    fn best_split(&self, idx: &[usize]) -> Option<BestSplit> {
        let n = idx.len();
        let total = self.class_counts(idx);
        let mut best: Option<BestSplit> = None;

        for feature in 0..FEATURE_COUNT {
            let mut sorted = idx.to_vec();
            sorted.sort_by(|&a, &b| self.rows[a][feature].total_cmp(&self.rows[b][feature]));

            let mut left = vec![0usize; self.n_classes];
            for pos in 0..n - 1 {
                let i = sorted[pos];
                left[self.targets[i]] += 1;

                let here = self.rows[i][feature];
                let next = self.rows[sorted[pos + 1]][feature];
                if here == next {
                    continue;
                }

                let n_left = pos + 1;
                let n_right = n - n_left;
                let right: Vec<usize> = total.iter().zip(&left).map(|(t, l)| t - l).collect();
                let weighted = (n_left as f64 * gini(&left, n_left)
                    + n_right as f64 * gini(&right, n_right))
                    / n as f64;

                let improves = match &best {
                    Some(b) => weighted < b.impurity,
                    None => true,
                };
                if improves {
                    best = Some(BestSplit {
                        feature,
                        threshold: (here + next) / 2.0,
                        impurity: weighted,
                    });
                }
            }
        }
        best
    }

    fn class_counts(&self, idx: &[usize]) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes];
        for &i in idx {
            counts[self.targets[i]] += 1;
        }
        counts
    }
}

fn gini(counts: &[usize], n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / n;
            p * p
        })
        .sum::<f64>()
}

/// Most frequent class; ties go to the lowest index.
fn majority(counts: &[usize]) -> usize {
    let mut best = 0;
    for (class, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = class;
        }
    }
    best
}

/// [`ModelPredictor`] backed by a fitted [`DecisionTree`].
///
/// Refuses budgets outside the range the tree was trained on rather than
/// extrapolating from the outermost leaf.
#[derive(Debug, Clone)]
pub struct DecisionTreePredictor {
    tree: DecisionTree,
    budget_range: (f64, f64),
}

impl DecisionTreePredictor {
    pub fn new(tree: DecisionTree, budget_range: (f64, f64)) -> Self {
        Self { tree, budget_range }
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn budget_range(&self) -> (f64, f64) {
        self.budget_range
    }
}

impl ModelPredictor for DecisionTreePredictor {
    fn name(&self) -> &str {
        "decision-tree"
    }

    fn predict(&self, req: &UserRequirement) -> Result<String, PredictError> {
        let x = encode(req);
        let (min, max) = self.budget_range;
        let budget = x[BUDGET_FEATURE];
        if !(min..=max).contains(&budget) {
            return Err(PredictError::OutOfDistribution {
                feature: "budget",
                value: budget,
                min,
                max,
            });
        }

        self.tree
            .predict_label(&x)
            .map(str::to_string)
            .ok_or_else(|| PredictError::Unavailable("malformed decision tree".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llmmatch_core::api::{ContextLength, Deployment, LatencyClass, Priority, TaskType};
    use pretty_assertions::assert_eq;

    fn row(task: f64, budget: f64) -> Features {
        [task, budget, 0.0, 4000.0, 0.0, 3.0]
    }

    fn classes() -> Vec<String> {
        vec!["cheap".into(), "strong".into()]
    }

    #[test]
    fn test_fit_separates_on_budget() {
        let rows = vec![row(0.0, 1.0), row(0.0, 2.0), row(0.0, 30.0), row(0.0, 40.0)];
        let targets = vec![0, 0, 1, 1];
        let tree = DecisionTree::fit(&rows, &targets, classes(), TreeParams::default()).unwrap();

        assert_eq!(tree.depth(), 1);
        assert_eq!(
            tree.nodes[0],
            Node::Split {
                feature: BUDGET_FEATURE,
                threshold: 16.0,
                left: 1,
                right: 2
            }
        );
        assert_eq!(tree.predict_label(&row(0.0, 5.0)), Some("cheap"));
        assert_eq!(tree.predict_label(&row(0.0, 50.0)), Some("strong"));
    }

    #[test]
    fn test_fit_memorizes_separable_data() {
        // Label depends on task and budget jointly.
        let mut rows = Vec::new();
        let mut targets = Vec::new();
        for task in 0..6 {
            for budget in [0.5, 3.0, 12.0, 60.0] {
                rows.push(row(task as f64, budget));
                targets.push(usize::from(task % 2 == 0 && budget > 5.0));
            }
        }
        let tree = DecisionTree::fit(&rows, &targets, classes(), TreeParams::default()).unwrap();
        for (x, &t) in rows.iter().zip(&targets) {
            assert_eq!(tree.classify(x), Some(t));
        }
    }

    #[test]
    fn test_max_depth_zero_is_a_single_majority_leaf() {
        let rows = vec![row(0.0, 1.0), row(0.0, 2.0), row(0.0, 30.0)];
        let params = TreeParams {
            max_depth: 0,
            min_samples_split: 2,
        };
        let tree = DecisionTree::fit(&rows, &[1, 0, 1], classes(), params).unwrap();
        assert_eq!(tree.nodes, vec![Node::Leaf { class: 1 }]);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_identical_rows_cannot_split() {
        let rows = vec![row(1.0, 5.0); 4];
        let tree = DecisionTree::fit(&rows, &[0, 1, 1, 0], classes(), TreeParams::default())
            .unwrap();
        // Tie between classes goes to the lowest index.
        assert_eq!(tree.nodes, vec![Node::Leaf { class: 0 }]);
    }

    #[test]
    fn test_fit_rejects_bad_input() {
        let params = TreeParams::default();
        assert!(DecisionTree::fit(&[], &[], classes(), params).is_err());
        assert!(DecisionTree::fit(&[row(0.0, 1.0)], &[], classes(), params).is_err());
        assert!(DecisionTree::fit(&[row(0.0, 1.0)], &[7], classes(), params).is_err());
    }

    #[test]
    fn test_classify_survives_malformed_tree() {
        let tree = DecisionTree {
            nodes: vec![Node::Split {
                feature: 1,
                threshold: 1.0,
                left: 0,
                right: 9,
            }],
            classes: classes(),
        };
        assert_eq!(tree.classify(&row(0.0, 0.5)), None);
        assert_eq!(tree.classify(&row(0.0, 5.0)), None);
    }

    #[test]
    fn test_tree_json_shape() {
        let tree = DecisionTree {
            nodes: vec![Node::Leaf { class: 1 }],
            classes: classes(),
        };
        let v = serde_json::to_value(&tree).unwrap();
        assert_eq!(v["nodes"][0]["kind"], "leaf");
        assert_eq!(v["nodes"][0]["class"], 1);
        let back: DecisionTree = serde_json::from_value(v).unwrap();
        assert_eq!(back, tree);
    }

    fn requirement(budget: f64) -> UserRequirement {
        UserRequirement {
            task_type: TaskType::Code,
            budget,
            latency: LatencyClass::Realtime,
            context_length: ContextLength::K4,
            deployment: Deployment::Cloud,
            priority: Priority::Balanced,
        }
    }

    #[test]
    fn test_predictor_checks_budget_range() {
        let rows = vec![row(0.0, 1.0), row(0.0, 2.0), row(0.0, 30.0), row(0.0, 40.0)];
        let tree = DecisionTree::fit(&rows, &[0, 0, 1, 1], classes(), TreeParams::default())
            .unwrap();
        let p = DecisionTreePredictor::new(tree, (0.1, 100.0));

        assert_eq!(p.name(), "decision-tree");
        assert_eq!(p.predict(&requirement(0.1)).unwrap(), "cheap");
        assert_eq!(p.predict(&requirement(100.0)).unwrap(), "strong");
        assert_eq!(
            p.predict(&requirement(250.0)).unwrap_err(),
            PredictError::OutOfDistribution {
                feature: "budget",
                value: 250.0,
                min: 0.1,
                max: 100.0
            }
        );
        assert!(matches!(
            p.predict(&requirement(0.05)),
            Err(PredictError::OutOfDistribution { .. })
        ));
    }
}

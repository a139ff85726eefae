use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;

use crate::io::open_maybe_gz;
use crate::model::{Objective, Tree, TreeEnsemble};

#[derive(Debug, Deserialize)]
struct ModelFile {
    learner: Learner,
}

#[derive(Debug, Deserialize)]
struct Learner {
    #[serde(default)]
    feature_names: Vec<String>,
    gradient_booster: GradientBooster,
    learner_model_param: LearnerModelParam,
    objective: ObjectiveSpec,
}

#[derive(Debug, Deserialize)]
struct GradientBooster {
    name: String,
    model: Option<GbTreeModel>,
}

#[derive(Debug, Deserialize)]
struct GbTreeModel {
    trees: Vec<JsonTree>,
    #[serde(default)]
    tree_info: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct JsonTree {
    left_children: Vec<i32>,
    right_children: Vec<i32>,
    split_indices: Vec<u32>,
    split_conditions: Vec<f64>,
    default_left: Vec<Flag>,
    sum_hessian: Vec<f64>,
    #[serde(default)]
    split_type: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct LearnerModelParam {
    base_score: String,
    #[serde(default)]
    num_class: Option<String>,
    num_feature: String,
}

#[derive(Debug, Deserialize)]
struct ObjectiveSpec {
    name: String,
}

/// Older dumps store `default_left` as 0/1, newer ones as booleans.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

impl Flag {
    fn as_bool(self) -> bool {
        match self {
            Flag::Bool(b) => b,
            Flag::Int(i) => i != 0,
        }
    }
}

pub fn read_model(path: &Path) -> Result<TreeEnsemble> {
    let reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open model {}", path.display()))?;
    let model = parse_model(reader)
        .with_context(|| format!("failed to load model {}", path.display()))?;
    info!(
        model = %path.display(),
        trees = model.num_trees(),
        features = model.num_features,
        objective = model.objective.as_str(),
        "model_loaded"
    );
    Ok(model)
}

pub fn parse_model<R: Read>(reader: R) -> Result<TreeEnsemble> {
    let file: ModelFile = serde_json::from_reader(BufReader::new(reader))
        .context("model is not valid XGBoost JSON")?;
    into_ensemble(file.learner)
}

pub fn parse_model_str(content: &str) -> Result<TreeEnsemble> {
    parse_model(content.as_bytes())
}

fn into_ensemble(learner: Learner) -> Result<TreeEnsemble> {
    if learner.gradient_booster.name != "gbtree" {
        bail!(
            "unsupported booster '{}' (only gbtree is supported)",
            learner.gradient_booster.name
        );
    }
    let objective = Objective::parse(&learner.objective.name)?;

    let params = &learner.learner_model_param;
    if let Some(num_class) = &params.num_class {
        let n: u32 = num_class
            .trim()
            .parse()
            .with_context(|| format!("invalid num_class '{}'", num_class))?;
        if n > 1 {
            bail!("multi-class models are not supported (num_class={})", n);
        }
    }
    let num_features: usize = params
        .num_feature
        .trim()
        .parse()
        .with_context(|| format!("invalid num_feature '{}'", params.num_feature))?;
    let base_score = parse_base_score(&params.base_score)?;
    let base_margin = objective.base_margin(base_score)?;

    let model = learner
        .gradient_booster
        .model
        .context("gbtree booster has no model section")?;
    if model.tree_info.iter().any(|&group| group != 0) {
        bail!("model has trees for more than one output group");
    }

    let mut trees = Vec::with_capacity(model.trees.len());
    for (i, t) in model.trees.into_iter().enumerate() {
        trees.push(convert_tree(t).with_context(|| format!("tree {} is malformed", i))?);
    }

    let feature_names = if learner.feature_names.is_empty() {
        None
    } else {
        Some(learner.feature_names)
    };

    TreeEnsemble::new(trees, base_margin, num_features, objective, feature_names)
}

fn convert_tree(t: JsonTree) -> Result<Tree> {
    if let Some(node) = t.split_type.iter().position(|&s| s != 0) {
        bail!("categorical split at node {} is not supported", node);
    }
    Tree::new(
        t.left_children,
        t.right_children,
        t.split_indices,
        t.split_conditions,
        t.default_left.into_iter().map(Flag::as_bool).collect(),
        t.sum_hessian,
    )
}

/// Accepts `"5E-1"` as well as the bracketed `"[5E-1]"` form.
pub fn parse_base_score(raw: &str) -> Result<f64> {
    let trimmed = raw.trim().trim_start_matches('[').trim_end_matches(']').trim();
    if trimmed.contains(',') {
        bail!("multi-target base_score '{}' is not supported", raw);
    }
    trimmed
        .parse::<f64>()
        .with_context(|| format!("invalid base_score '{}'", raw))
}

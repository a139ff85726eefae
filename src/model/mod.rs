//! Gradient-boosted tree ensemble for binary delay classification.
//!
//! Trees follow the XGBoost node layout: parallel arrays indexed by node id,
//! node 0 is the root, leaves have no children and keep their value in the
//! split-condition slot.

pub mod treeshap;

use anyhow::{Result, bail};

use crate::math::stats::{logit, sigmoid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    BinaryLogistic,
    BinaryLogitRaw,
    RegLogistic,
}

impl Objective {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "binary:logistic" => Ok(Self::BinaryLogistic),
            "binary:logitraw" => Ok(Self::BinaryLogitRaw),
            "reg:logistic" => Ok(Self::RegLogistic),
            other => bail!("unsupported objective '{}' (expected a binary classifier)", other),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BinaryLogistic => "binary:logistic",
            Self::BinaryLogitRaw => "binary:logitraw",
            Self::RegLogistic => "reg:logistic",
        }
    }

    /// Converts a stored `base_score` into margin space.
    pub fn base_margin(self, base_score: f64) -> Result<f64> {
        match self {
            Self::BinaryLogitRaw => Ok(base_score),
            Self::BinaryLogistic | Self::RegLogistic => {
                if !(base_score > 0.0 && base_score < 1.0) {
                    bail!(
                        "base_score {} must lie in (0, 1) for {}",
                        base_score,
                        self.as_str()
                    );
                }
                Ok(logit(base_score))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tree {
    left: Vec<i32>,
    right: Vec<i32>,
    feature: Vec<u32>,
    condition: Vec<f64>,
    default_left: Vec<bool>,
    cover: Vec<f64>,
}

impl Tree {
    pub fn new(
        left: Vec<i32>,
        right: Vec<i32>,
        feature: Vec<u32>,
        condition: Vec<f64>,
        default_left: Vec<bool>,
        cover: Vec<f64>,
    ) -> Result<Self> {
        let n = left.len();
        if n == 0 {
            bail!("tree has no nodes");
        }
        for (name, len) in [
            ("right_children", right.len()),
            ("split_indices", feature.len()),
            ("split_conditions", condition.len()),
            ("default_left", default_left.len()),
            ("sum_hessian", cover.len()),
        ] {
            if len != n {
                bail!("{} length {} != left_children length {}", name, len, n);
            }
        }
        for node in 0..n {
            let (l, r) = (left[node], right[node]);
            if l == -1 {
                if r != -1 {
                    bail!("node {} has a right child but no left child", node);
                }
                continue;
            }
            for child in [l, r] {
                if child <= node as i32 || child as usize >= n {
                    bail!("node {} has invalid child index {}", node, child);
                }
            }
            if !(cover[node] > 0.0) {
                bail!("internal node {} has non-positive cover {}", node, cover[node]);
            }
        }
        Ok(Self {
            left,
            right,
            feature,
            condition,
            default_left,
            cover,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.left.len()
    }

    pub fn is_leaf(&self, node: usize) -> bool {
        self.left[node] == -1
    }

    pub fn left(&self, node: usize) -> usize {
        self.left[node] as usize
    }

    pub fn right(&self, node: usize) -> usize {
        self.right[node] as usize
    }

    pub fn split_feature(&self, node: usize) -> usize {
        self.feature[node] as usize
    }

    pub fn leaf_value(&self, node: usize) -> f64 {
        self.condition[node]
    }

    pub fn cover(&self, node: usize) -> f64 {
        self.cover[node]
    }

    /// Child taken by `row` at an internal node.
    pub fn next_node(&self, node: usize, row: &[f64]) -> usize {
        let x = row[self.split_feature(node)];
        let go_left = if x.is_nan() {
            self.default_left[node]
        } else {
            x < self.condition[node]
        };
        if go_left {
            self.left(node)
        } else {
            self.right(node)
        }
    }

    pub fn leaf_for(&self, row: &[f64]) -> usize {
        let mut node = 0;
        while !self.is_leaf(node) {
            node = self.next_node(node, row);
        }
        node
    }

    pub fn predict(&self, row: &[f64]) -> f64 {
        self.leaf_value(self.leaf_for(row))
    }

    /// Cover-weighted mean leaf value.
    pub fn expected_value(&self) -> f64 {
        self.node_expectation(0)
    }

    fn node_expectation(&self, node: usize) -> f64 {
        if self.is_leaf(node) {
            return self.leaf_value(node);
        }
        let (l, r) = (self.left(node), self.right(node));
        (self.cover[l] * self.node_expectation(l) + self.cover[r] * self.node_expectation(r))
            / self.cover[node]
    }

    pub fn max_split_feature(&self) -> Option<usize> {
        (0..self.num_nodes())
            .filter(|&n| !self.is_leaf(n))
            .map(|n| self.split_feature(n))
            .max()
    }
}

#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    pub trees: Vec<Tree>,
    pub base_margin: f64,
    pub num_features: usize,
    pub objective: Objective,
    pub feature_names: Option<Vec<String>>,
}

impl TreeEnsemble {
    pub fn new(
        trees: Vec<Tree>,
        base_margin: f64,
        num_features: usize,
        objective: Objective,
        feature_names: Option<Vec<String>>,
    ) -> Result<Self> {
        for (i, tree) in trees.iter().enumerate() {
            if let Some(max) = tree.max_split_feature() {
                if max >= num_features {
                    bail!(
                        "tree {} splits on feature {} but the model declares {} features",
                        i,
                        max,
                        num_features
                    );
                }
            }
        }
        if let Some(names) = &feature_names {
            if names.len() != num_features {
                bail!(
                    "model lists {} feature names but declares {} features",
                    names.len(),
                    num_features
                );
            }
        }
        Ok(Self {
            trees,
            base_margin,
            num_features,
            objective,
            feature_names,
        })
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn check_row(&self, row: &[f64]) -> Result<()> {
        if row.len() != self.num_features {
            bail!(
                "feature vector has {} columns but the model expects {}",
                row.len(),
                self.num_features
            );
        }
        Ok(())
    }

    /// Raw log-odds output.
    pub fn predict_margin(&self, row: &[f64]) -> Result<f64> {
        self.check_row(row)?;
        Ok(self.base_margin + self.trees.iter().map(|t| t.predict(row)).sum::<f64>())
    }

    /// `[p(no delay), p(delay)]`.
    pub fn predict_proba(&self, row: &[f64]) -> Result<[f64; 2]> {
        let p = sigmoid(self.predict_margin(row)?);
        Ok([1.0 - p, p])
    }

    /// Margin the attributions are measured from.
    pub fn expected_value(&self) -> f64 {
        self.base_margin + self.trees.iter().map(Tree::expected_value).sum::<f64>()
    }

    pub fn shap_values(&self, row: &[f64]) -> Result<Vec<f64>> {
        self.check_row(row)?;
        let mut phi = vec![0.0; self.num_features];
        for tree in &self.trees {
            treeshap::tree_shap(tree, row, &mut phi);
        }
        Ok(phi)
    }

    /// Confirms a derived schema lines up with what the model was trained on.
    pub fn check_schema(&self, names: &[String]) -> Result<()> {
        if names.len() != self.num_features {
            bail!(
                "feature schema has {} columns but the model expects {}",
                names.len(),
                self.num_features
            );
        }
        if let Some(trained) = &self.feature_names {
            for (i, (got, want)) in names.iter().zip(trained).enumerate() {
                if got != want {
                    bail!(
                        "feature {} is '{}' in the schema but '{}' in the model",
                        i,
                        got,
                        want
                    );
                }
            }
        }
        Ok(())
    }
}

//! Exact path-dependent TreeSHAP (Lundberg et al., Algorithm 2).
//!
//! Attributions are in margin space and weighted by node cover, so for every
//! tree `expected_value + sum(phi) == predict(row)`.

use crate::model::Tree;

#[derive(Debug, Clone, Copy)]
struct PathElement {
    /// `None` for the synthetic root element.
    feature: Option<usize>,
    zero_fraction: f64,
    one_fraction: f64,
    pweight: f64,
}

/// Adds the attributions of `tree` for `row` into `phi`.
pub fn tree_shap(tree: &Tree, row: &[f64], phi: &mut [f64]) {
    let path = Vec::with_capacity(tree.num_nodes().min(64));
    recurse(tree, row, phi, 0, path, 1.0, 1.0, None);
}

#[allow(clippy::too_many_arguments)]
fn recurse(
    tree: &Tree,
    row: &[f64],
    phi: &mut [f64],
    node: usize,
    mut path: Vec<PathElement>,
    parent_zero_fraction: f64,
    parent_one_fraction: f64,
    parent_feature: Option<usize>,
) {
    extend_path(
        &mut path,
        parent_zero_fraction,
        parent_one_fraction,
        parent_feature,
    );

    if tree.is_leaf(node) {
        let value = tree.leaf_value(node);
        for i in 1..path.len() {
            let weight = unwound_path_sum(&path, i);
            let el = path[i];
            if let Some(feature) = el.feature {
                phi[feature] += weight * (el.one_fraction - el.zero_fraction) * value;
            }
        }
        return;
    }

    let split = tree.split_feature(node);
    let hot = tree.next_node(node, row);
    let cold = if hot == tree.left(node) {
        tree.right(node)
    } else {
        tree.left(node)
    };
    let cover = tree.cover(node);
    let hot_zero_fraction = tree.cover(hot) / cover;
    let cold_zero_fraction = tree.cover(cold) / cover;

    let mut incoming_zero_fraction = 1.0;
    let mut incoming_one_fraction = 1.0;

    // A feature already on the path is unwound so it is only counted once.
    if let Some(k) = (1..path.len()).find(|&k| path[k].feature == Some(split)) {
        incoming_zero_fraction = path[k].zero_fraction;
        incoming_one_fraction = path[k].one_fraction;
        unwind_path(&mut path, k);
    }

    recurse(
        tree,
        row,
        phi,
        hot,
        path.clone(),
        hot_zero_fraction * incoming_zero_fraction,
        incoming_one_fraction,
        Some(split),
    );
    recurse(
        tree,
        row,
        phi,
        cold,
        path,
        cold_zero_fraction * incoming_zero_fraction,
        0.0,
        Some(split),
    );
}

fn extend_path(
    path: &mut Vec<PathElement>,
    zero_fraction: f64,
    one_fraction: f64,
    feature: Option<usize>,
) {
    let depth = path.len();
    path.push(PathElement {
        feature,
        zero_fraction,
        one_fraction,
        pweight: if depth == 0 { 1.0 } else { 0.0 },
    });
    let denom = (depth + 1) as f64;
    for i in (0..depth).rev() {
        path[i + 1].pweight += one_fraction * path[i].pweight * (i + 1) as f64 / denom;
        path[i].pweight = zero_fraction * path[i].pweight * (depth - i) as f64 / denom;
    }
}

fn unwind_path(path: &mut Vec<PathElement>, path_index: usize) {
    let depth = path.len() - 1;
    let one_fraction = path[path_index].one_fraction;
    let zero_fraction = path[path_index].zero_fraction;
    let denom = (depth + 1) as f64;
    let mut next_one_portion = path[depth].pweight;

    for i in (0..depth).rev() {
        if one_fraction != 0.0 {
            let tmp = path[i].pweight;
            path[i].pweight = next_one_portion * denom / ((i + 1) as f64 * one_fraction);
            next_one_portion =
                tmp - path[i].pweight * zero_fraction * (depth - i) as f64 / denom;
        } else {
            path[i].pweight = path[i].pweight * denom / (zero_fraction * (depth - i) as f64);
        }
    }

    for i in path_index..depth {
        path[i].feature = path[i + 1].feature;
        path[i].zero_fraction = path[i + 1].zero_fraction;
        path[i].one_fraction = path[i + 1].one_fraction;
    }
    path.pop();
}

fn unwound_path_sum(path: &[PathElement], path_index: usize) -> f64 {
    let depth = path.len() - 1;
    let one_fraction = path[path_index].one_fraction;
    let zero_fraction = path[path_index].zero_fraction;
    let denom = (depth + 1) as f64;
    let mut next_one_portion = path[depth].pweight;
    let mut total = 0.0;

    for i in (0..depth).rev() {
        if one_fraction != 0.0 {
            let tmp = next_one_portion * denom / ((i + 1) as f64 * one_fraction);
            total += tmp;
            next_one_portion = path[i].pweight - tmp * zero_fraction * (depth - i) as f64 / denom;
        } else if zero_fraction != 0.0 {
            total += path[i].pweight / zero_fraction / ((depth - i) as f64 / denom);
        }
    }
    total
}

use anyhow::{Context, Result, bail};

use crate::features::{FeatureSchema, FeatureVector, readable_name};
use crate::model::TreeEnsemble;
use crate::scores::{AttributionBar, Direction, Explanation};

pub const DEFAULT_MAX_DISPLAY: usize = 10;

pub fn explain(
    model: &TreeEnsemble,
    schema: &FeatureSchema,
    vector: &FeatureVector,
) -> Result<Explanation> {
    if schema.len() != vector.len() {
        bail!(
            "feature vector has {} columns but the schema has {}",
            vector.len(),
            schema.len()
        );
    }
    let attributions = model.shap_values(vector.as_slice())?;
    let top_index = top_index(&attributions).context("no features to attribute")?;
    let top_feature = schema
        .name_at(top_index)
        .context("top attribution outside the schema")?
        .to_string();
    let readable = readable_name(&top_feature);
    let direction = Direction::of(attributions[top_index]);
    let sentence = sentence(direction, &readable);

    Ok(Explanation {
        baseline: model.expected_value(),
        attributions,
        top_index,
        top_feature,
        readable_name: readable,
        direction,
        sentence,
    })
}

/// Index of the largest |attribution|; the first one wins ties.
pub fn top_index(attributions: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in attributions.iter().enumerate() {
        let mag = v.abs();
        match best {
            Some((_, b)) if mag <= b => {}
            _ => best = Some((i, mag)),
        }
    }
    best.map(|(i, _)| i)
}

pub fn sentence(direction: Direction, readable_name: &str) -> String {
    format!(
        "The delay risk {} primarily due to: {}",
        direction.as_str(),
        readable_name
    )
}

/// Bars ordered by |attribution|. When there are more features than
/// `max_display`, the tail is folded into one "Sum of N other features" bar.
pub fn attribution_bars(
    names: &[String],
    values: &[f64],
    attributions: &[f64],
    max_display: usize,
) -> Vec<AttributionBar> {
    let mut order: Vec<usize> = (0..attributions.len()).collect();
    order.sort_by(|&a, &b| attributions[b].abs().total_cmp(&attributions[a].abs()));

    let max_display = max_display.max(1);
    let shown = if order.len() > max_display {
        max_display - 1
    } else {
        order.len()
    };

    let mut bars: Vec<AttributionBar> = order[..shown]
        .iter()
        .map(|&i| AttributionBar {
            label: format!("{} = {}", format_value(values[i]), names[i]),
            value: attributions[i],
        })
        .collect();

    let rest = &order[shown..];
    if !rest.is_empty() {
        bars.push(AttributionBar {
            label: format!("Sum of {} other features", rest.len()),
            value: rest.iter().map(|&i| attributions[i]).sum(),
        });
    }
    bars
}

fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.3}", v)
    }
}

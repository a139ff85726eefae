use anyhow::Result;

use crate::features::FeatureVector;
use crate::model::TreeEnsemble;
use crate::scores::Prediction;

pub fn predict_risk(model: &TreeEnsemble, vector: &FeatureVector) -> Result<Prediction> {
    let margin = model.predict_margin(vector.as_slice())?;
    let class_probabilities = model.predict_proba(vector.as_slice())?;
    Ok(Prediction {
        probability: class_probabilities[1],
        margin,
        class_probabilities,
    })
}

/// `0.42173` -> `"42.17%"`.
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

use serde::{Deserialize, Serialize};

use crate::features::Weekday;
use crate::scores::{CauseCount, Direction, MapMarker};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionMeta {
    pub line: String,
    pub hour: u8,
    pub day: Option<Weekday>,
    pub day_of_week: Option<u8>,
    pub is_peak: Option<bool>,
    pub is_weekend: Option<bool>,
    pub line_in_schema: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMeta {
    pub path: String,
    pub objective: Option<String>,
    pub num_trees: Option<u64>,
    pub num_features: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMeta {
    pub path: String,
    pub rows: Option<u64>,
    pub columns: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub probability: f64,
    pub percent: String,
    pub margin: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureAttribution {
    pub feature: String,
    pub value: f64,
    pub attribution: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationReport {
    pub baseline: f64,
    pub top_feature: String,
    pub readable_name: String,
    pub direction: Direction,
    pub sentence: String,
    pub attributions: Vec<FeatureAttribution>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayRiskV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub selection: SelectionMeta,
    pub model: ModelMeta,
    pub dataset: DatasetMeta,
    pub prediction: Option<PredictionReport>,
    pub explanation: Option<ExplanationReport>,
    pub map: Option<MapMarker>,
    pub delay_causes: Option<Vec<CauseCount>>,
    pub warnings: Vec<String>,
}

impl DelayRiskV1 {
    pub fn empty(tool_version: &str) -> Self {
        Self {
            tool: "ttc-delay-risk".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            selection: SelectionMeta {
                line: String::new(),
                hour: 0,
                day: None,
                day_of_week: None,
                is_peak: None,
                is_weekend: None,
                line_in_schema: None,
            },
            model: ModelMeta {
                path: String::new(),
                objective: None,
                num_trees: None,
                num_features: None,
            },
            dataset: DatasetMeta {
                path: String::new(),
                rows: None,
                columns: None,
            },
            prediction: None,
            explanation: None,
            map: None,
            delay_causes: None,
            warnings: Vec::new(),
        }
    }
}

pub mod attribution;
pub mod causes;
pub mod geo;
pub mod risk;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Positive ("delay") class probability.
    pub probability: f64,
    pub margin: f64,
    pub class_probabilities: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increased,
    Decreased,
}

impl Direction {
    /// Zero counts as a decrease.
    pub fn of(impact: f64) -> Self {
        if impact > 0.0 {
            Self::Increased
        } else {
            Self::Decreased
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increased => "increased",
            Self::Decreased => "decreased",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    /// Expected margin the attributions are measured against.
    pub baseline: f64,
    /// Parallel to the feature schema.
    pub attributions: Vec<f64>,
    pub top_index: usize,
    pub top_feature: String,
    pub readable_name: String,
    pub direction: Direction,
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributionBar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub line: String,
    pub lat: f64,
    pub lon: f64,
    /// Probability as a percentage.
    pub risk: f64,
    pub radius_m: f64,
    pub fill_color: [u8; 4],
    pub zoom: f64,
    pub pitch: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseCount {
    pub cause: String,
    pub count: u64,
}

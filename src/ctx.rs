use std::path::PathBuf;

use crate::features::{AssembledVector, FeatureSchema, Selection};
use crate::io::dataset::Dataset;
use crate::model::TreeEnsemble;
use crate::schema::v1::DelayRiskV1;
use crate::scores::attribution::DEFAULT_MAX_DISPLAY;
use crate::scores::{CauseCount, Explanation, MapMarker, Prediction};

pub const DEFAULT_MODEL_PATH: &str = "model.json";
pub const DEFAULT_DATA_PATH: &str = "ttc_final_dataset.csv";

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
    pub geojson_path: PathBuf,
}

/// State of one run. Every invocation starts from a fresh context.
#[derive(Debug)]
pub struct Ctx {
    pub model_path: PathBuf,
    pub data_path: PathBuf,
    pub selection: Option<Selection>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub write_geojson: bool,
    pub max_display: usize,
    pub warnings: Vec<String>,
    pub model: Option<TreeEnsemble>,
    pub dataset: Option<Dataset>,
    pub schema: Option<FeatureSchema>,
    pub line_choices: Vec<String>,
    pub assembled: Option<AssembledVector>,
    pub prediction: Option<Prediction>,
    pub explanation: Option<Explanation>,
    pub map: Option<MapMarker>,
    pub delay_causes: Option<Vec<CauseCount>>,
    pub output: OutputPaths,
    pub report: DelayRiskV1,
}

impl Ctx {
    pub fn new(
        model_path: PathBuf,
        data_path: PathBuf,
        out_dir: PathBuf,
        write_json: bool,
        write_tsv: bool,
        write_geojson: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("delay_risk.json");
        let tsv_path = out_dir.join("attributions.tsv");
        let geojson_path = out_dir.join("risk_map.geojson");
        Self {
            model_path,
            data_path,
            selection: None,
            write_json,
            write_tsv,
            write_geojson,
            max_display: DEFAULT_MAX_DISPLAY,
            warnings: Vec::new(),
            model: None,
            dataset: None,
            schema: None,
            line_choices: Vec::new(),
            assembled: None,
            prediction: None,
            explanation: None,
            map: None,
            delay_causes: None,
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
                geojson_path,
            },
            report: DelayRiskV1::empty(tool_version),
        }
    }

    pub fn writes_files(&self) -> bool {
        self.write_json || self.write_tsv || self.write_geojson
    }
}

use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{dataset, xgboost};
use crate::pipeline::Stage;

/// Loads the classifier and the dataset. Any failure here ends the run.
pub struct Stage1Load;

impl Stage1Load {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Load {
    fn name(&self) -> &'static str {
        "stage1_load"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!(
            model = %ctx.model_path.display(),
            dataset = %ctx.data_path.display(),
            "input_files"
        );
        let model = xgboost::read_model(&ctx.model_path)?;
        let dataset = dataset::read_dataset(&ctx.data_path)?;

        ctx.report.model.objective = Some(model.objective.as_str().to_string());
        ctx.report.model.num_trees = Some(model.num_trees() as u64);
        ctx.report.model.num_features = Some(model.num_features as u64);
        ctx.report.dataset.rows = Some(dataset.rows as u64);
        ctx.report.dataset.columns = Some(dataset.headers.len() as u64);

        ctx.model = Some(model);
        ctx.dataset = Some(dataset);
        Ok(())
    }
}

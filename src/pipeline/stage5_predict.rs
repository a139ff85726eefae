use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::risk::predict_risk;

pub struct Stage5Predict;

impl Stage5Predict {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Predict {
    fn name(&self) -> &'static str {
        "stage5_predict"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let model = ctx.model.as_ref().context("model not loaded")?;
        let assembled = ctx.assembled.as_ref().context("feature vector missing")?;
        let prediction = predict_risk(model, &assembled.vector)?;
        info!(
            probability = prediction.probability,
            margin = prediction.margin,
            "prediction_ready"
        );
        ctx.prediction = Some(prediction);
        Ok(())
    }
}

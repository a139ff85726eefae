use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::attribution::explain;

pub struct Stage6Explain;

impl Stage6Explain {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Explain {
    fn name(&self) -> &'static str {
        "stage6_explain"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let model = ctx.model.as_ref().context("model not loaded")?;
        let schema = ctx.schema.as_ref().context("feature schema missing")?;
        let assembled = ctx.assembled.as_ref().context("feature vector missing")?;
        let explanation = explain(model, schema, &assembled.vector)?;
        info!(
            top_feature = %explanation.top_feature,
            direction = explanation.direction.as_str(),
            baseline = explanation.baseline,
            "explanation_ready"
        );
        ctx.explanation = Some(explanation);
        Ok(())
    }
}

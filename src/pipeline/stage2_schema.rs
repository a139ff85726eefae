use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::features::FeatureSchema;
use crate::pipeline::Stage;

pub struct Stage2Schema;

impl Stage2Schema {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Schema {
    fn name(&self) -> &'static str {
        "stage2_schema"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let dataset = ctx.dataset.as_ref().context("dataset not loaded")?;
        let schema = FeatureSchema::from_headers(&dataset.headers)?;
        if let Some(model) = &ctx.model {
            model.check_schema(schema.names())?;
        }
        ctx.line_choices = schema.line_choices();
        info!(
            features = schema.len(),
            lines = ctx.line_choices.len(),
            "feature_schema_ready"
        );
        ctx.schema = Some(schema);
        Ok(())
    }
}

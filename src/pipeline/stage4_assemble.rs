use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::features::{assemble, line_column};
use crate::pipeline::Stage;

pub struct Stage4Assemble;

impl Stage4Assemble {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Assemble {
    fn name(&self) -> &'static str {
        "stage4_assemble"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let schema = ctx.schema.as_ref().context("feature schema missing")?;
        let selection = ctx.selection.as_ref().context("no selection provided")?;
        let assembled = assemble(schema, selection);

        if !assembled.line_matched {
            let column = line_column(&selection.line);
            warn!(column = %column, "line_column_missing");
            ctx.warnings.push(format!(
                "line '{}' has no {} column; prediction assumes no line",
                selection.line, column
            ));
        }

        ctx.report.selection.day_of_week = Some(assembled.day_of_week);
        ctx.report.selection.is_peak = Some(assembled.is_peak);
        ctx.report.selection.is_weekend = Some(assembled.is_weekend);
        ctx.report.selection.line_in_schema = Some(assembled.line_matched);

        info!(
            columns = assembled.vector.len(),
            is_peak = assembled.is_peak,
            is_weekend = assembled.is_weekend,
            "feature_vector_ready"
        );
        ctx.assembled = Some(assembled);
        Ok(())
    }
}

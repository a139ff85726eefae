use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{geojson_writer, json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage9Output;

impl Stage9Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage9Output {
    fn name(&self) -> &'static str {
        "stage9_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let report = json_writer::build_report(ctx)?;
        ctx.report = report;

        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, &ctx.report)?;
        }
        if ctx.write_tsv {
            tsv_writer::write_tsv(&ctx.output.tsv_path, ctx)?;
        }
        if ctx.write_geojson {
            match &ctx.map {
                Some(marker) => geojson_writer::write_geojson(&ctx.output.geojson_path, marker)?,
                None => info!("no map marker; geojson not written"),
            }
        }

        info!("stage9_output_ready");
        Ok(())
    }
}

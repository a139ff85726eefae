use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::causes::{TOP_CAUSES, top_causes};

pub struct Stage8Causes;

impl Stage8Causes {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage8Causes {
    fn name(&self) -> &'static str {
        "stage8_causes"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let dataset = ctx.dataset.as_ref().context("dataset not loaded")?;
        let Some(reasons) = &dataset.delay_reasons else {
            info!("delay_reason column absent; cause summary skipped");
            ctx.delay_causes = None;
            return Ok(());
        };
        let tally = top_causes(reasons.iter().map(String::as_str), TOP_CAUSES);
        info!(causes = tally.len(), "delay_causes_ready");
        ctx.delay_causes = Some(tally);
        Ok(())
    }
}

use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_load;
pub mod stage2_schema;
pub mod stage3_selection;
pub mod stage4_assemble;
pub mod stage5_predict;
pub mod stage6_explain;
pub mod stage7_geo;
pub mod stage8_causes;
pub mod stage9_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Every stage of a `predict` run, in order.
    pub fn predict() -> Self {
        Self::new(vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_load::Stage1Load::new()),
            Box::new(stage2_schema::Stage2Schema::new()),
            Box::new(stage3_selection::Stage3Selection::new()),
            Box::new(stage4_assemble::Stage4Assemble::new()),
            Box::new(stage5_predict::Stage5Predict::new()),
            Box::new(stage6_explain::Stage6Explain::new()),
            Box::new(stage7_geo::Stage7Geo::new()),
            Box::new(stage8_causes::Stage8Causes::new()),
            Box::new(stage9_output::Stage9Output::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}

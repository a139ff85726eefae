use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::geo::{NO_COORDINATES_WARNING, render_marker};

pub struct Stage7Geo;

impl Stage7Geo {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Geo {
    fn name(&self) -> &'static str {
        "stage7_geo"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let selection = ctx.selection.as_ref().context("no selection provided")?;
        let prediction = ctx.prediction.as_ref().context("prediction missing")?;
        match render_marker(&selection.line, prediction.probability) {
            Some(marker) => {
                info!(
                    line = %marker.line,
                    lat = marker.lat,
                    lon = marker.lon,
                    radius_m = marker.radius_m,
                    "map_marker_ready"
                );
                ctx.map = Some(marker);
            }
            None => {
                warn!(line = %selection.line, "map_coordinates_missing");
                ctx.warnings.push(NO_COORDINATES_WARNING.to_string());
                ctx.map = None;
            }
        }
        Ok(())
    }
}

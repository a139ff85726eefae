use anyhow::{Context, Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

/// Checks the operator's selections. An empty line selects the first line in
/// sorted order; a line outside the choice set is flagged by the assembler.
pub struct Stage3Selection;

impl Stage3Selection {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Selection {
    fn name(&self) -> &'static str {
        "stage3_selection"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let selection = ctx.selection.as_mut().context("no selection provided")?;
        if selection.hour > 23 {
            bail!("hour {} is outside 0-23", selection.hour);
        }

        if selection.line.is_empty() {
            selection.line = ctx
                .line_choices
                .first()
                .cloned()
                .context("dataset has no line_* columns; pass --line")?;
            info!(line = %selection.line, "default_line_selected");
        }

        ctx.report.selection.line = selection.line.clone();
        ctx.report.selection.hour = selection.hour;
        ctx.report.selection.day = Some(selection.day);

        info!(
            line = %selection.line,
            hour = selection.hour,
            day = %selection.day,
            "selection_ready"
        );
        Ok(())
    }
}

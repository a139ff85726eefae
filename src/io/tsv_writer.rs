use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;

/// One row per schema feature, in schema order.
pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let schema = ctx.schema.as_ref().context("feature schema missing")?;
    let assembled = ctx.assembled.as_ref().context("feature vector missing")?;
    let explanation = ctx.explanation.as_ref().context("explanation missing")?;

    let n = schema.len();
    ensure_len(assembled.vector.len(), n, "feature vector")?;
    ensure_len(explanation.attributions.len(), n, "attributions")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "feature\tvalue\tattribution")?;
    for (i, name) in schema.names().iter().enumerate() {
        writeln!(
            w,
            "{}\t{:.6}\t{:.6}",
            name, assembled.vector.values[i], explanation.attributions[i]
        )?;
    }
    w.flush()?;
    Ok(())
}

fn ensure_len(got: usize, expected: usize, name: &str) -> Result<()> {
    if got != expected {
        bail!("{} length mismatch: {} != {}", name, got, expected);
    }
    Ok(())
}

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;
use crate::schema::v1::{DelayRiskV1, ExplanationReport, FeatureAttribution, PredictionReport};
use crate::scores::risk::format_percent;

pub fn build_report(ctx: &Ctx) -> Result<DelayRiskV1> {
    let mut report = ctx.report.clone();
    report.version = env!("CARGO_PKG_VERSION").to_string();

    report.prediction = ctx.prediction.as_ref().map(|p| PredictionReport {
        probability: p.probability,
        percent: format_percent(p.probability),
        margin: p.margin,
    });

    report.explanation = match &ctx.explanation {
        Some(explanation) => {
            let schema = ctx.schema.as_ref().context("feature schema missing")?;
            let assembled = ctx.assembled.as_ref().context("feature vector missing")?;
            let values = assembled.vector.as_slice();
            if explanation.attributions.len() != schema.len() || values.len() != schema.len() {
                bail!(
                    "attribution length {} does not match schema length {}",
                    explanation.attributions.len(),
                    schema.len()
                );
            }
            let attributions = schema
                .names()
                .iter()
                .zip(values)
                .zip(&explanation.attributions)
                .map(|((feature, &value), &attribution)| FeatureAttribution {
                    feature: feature.clone(),
                    value,
                    attribution,
                })
                .collect();
            Some(ExplanationReport {
                baseline: explanation.baseline,
                top_feature: explanation.top_feature.clone(),
                readable_name: explanation.readable_name.clone(),
                direction: explanation.direction,
                sentence: explanation.sentence.clone(),
                attributions,
            })
        }
        None => None,
    };

    report.map = ctx.map.clone();
    report.delay_causes = ctx.delay_causes.clone();
    report.warnings = ctx.warnings.clone();
    Ok(report)
}

pub fn write_json(path: &Path, report: &DelayRiskV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

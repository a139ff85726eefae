use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::scores::attribution::attribution_bars;
use crate::scores::risk::format_percent;

const BAR_WIDTH: usize = 30;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let selection = ctx.selection.as_ref().context("no selection provided")?;
    let assembled = ctx.assembled.as_ref().context("feature vector missing")?;
    let prediction = ctx.prediction.as_ref().context("prediction missing")?;

    let mut out = String::new();
    out.push_str(&format!("ttc-delay-risk v{}\n", version));
    out.push_str(&format!(
        "Selection: line={}, hour={}, day={} (peak={}, weekend={})\n",
        selection.line,
        selection.hour,
        selection.day,
        yes_no(assembled.is_peak),
        yes_no(assembled.is_weekend)
    ));
    out.push_str(&format!(
        "Predicted Delay Risk: {}\n",
        format_percent(prediction.probability)
    ));

    if let Some(explanation) = &ctx.explanation {
        let schema = ctx.schema.as_ref().context("feature schema missing")?;
        out.push_str(&format!(
            "\nExplanation of Prediction (baseline {:+.4}, output {:+.4} log-odds)\n",
            explanation.baseline, prediction.margin
        ));
        let bars = attribution_bars(
            schema.names(),
            assembled.vector.as_slice(),
            &explanation.attributions,
            ctx.max_display,
        );
        let max = bars.iter().map(|b| b.value.abs()).fold(0.0, f64::max);
        let label_width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
        for bar in &bars {
            out.push_str(&format!(
                "  {:+.4}  {:<width$}  {}\n",
                bar.value,
                bar.label,
                render_bar(bar.value, max, BAR_WIDTH),
                width = label_width
            ));
        }
        out.push_str(&format!("Reason: {}\n", explanation.sentence));
    }

    match &ctx.map {
        Some(marker) => out.push_str(&format!(
            "\nRisk Map: {} at ({:.4}, {:.4}), radius {:.0} m\n",
            marker.line, marker.lat, marker.lon, marker.radius_m
        )),
        None => out.push_str("\nRisk Map: unavailable\n"),
    }

    if let Some(causes) = &ctx.delay_causes {
        out.push_str("\nTop 5 Delay Reasons\n");
        if causes.is_empty() {
            out.push_str("  (no delay reasons recorded)\n");
        }
        let max = causes.iter().map(|c| c.count).max().unwrap_or(0) as f64;
        let label_width = causes.iter().map(|c| c.cause.len()).max().unwrap_or(0);
        for cause in causes {
            out.push_str(&format!(
                "  {:<width$}  {:>6}  {}\n",
                cause.cause,
                cause.count,
                render_bar(cause.count as f64, max, BAR_WIDTH),
                width = label_width
            ));
        }
    }

    Ok(out)
}

/// Horizontal bar scaled so that `max` fills `width` cells.
pub fn render_bar(value: f64, max: f64, width: usize) -> String {
    if !(max > 0.0) {
        return String::new();
    }
    let cells = ((value.abs() / max) * width as f64).round() as usize;
    "█".repeat(cells.min(width))
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::io::open_maybe_gz;
use crate::scores::causes::DELAY_REASON_COLUMN;

/// The parts of the static dataset a run needs: its header and the optional
/// free-text delay reason column.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: usize,
    pub delay_reasons: Option<Vec<String>>,
}

pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;
    let dataset = parse_dataset(reader, &path.display().to_string())?;
    info!(
        dataset = %path.display(),
        columns = dataset.headers.len(),
        rows = dataset.rows,
        delay_reason = dataset.delay_reasons.is_some(),
        "dataset_loaded"
    );
    Ok(dataset)
}

pub fn parse_dataset<R: Read>(reader: R, source: &str) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("{}: failed to read CSV header", source))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let reason_idx = headers.iter().position(|h| h == DELAY_REASON_COLUMN);

    let mut rows = 0usize;
    let mut reasons = reason_idx.map(|_| Vec::new());
    for (i, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("{}: malformed row {}", source, i + 2))?;
        if let (Some(idx), Some(out)) = (reason_idx, reasons.as_mut()) {
            out.push(record.get(idx).unwrap_or_default().to_string());
        }
        rows += 1;
    }

    Ok(Dataset {
        headers,
        rows,
        delay_reasons: reasons,
    })
}

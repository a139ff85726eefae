use crate::features::{FeatureSchema, Selection, is_peak_hour, line_column};

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    fn set(&mut self, idx: Option<usize>, value: f64) {
        if let Some(i) = idx {
            self.values[i] = value;
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssembledVector {
    pub vector: FeatureVector,
    pub day_of_week: u8,
    pub is_peak: bool,
    pub is_weekend: bool,
    /// False when the schema has no `line_<selected>` column.
    pub line_matched: bool,
}

pub fn assemble(schema: &FeatureSchema, selection: &Selection) -> AssembledVector {
    let mut vector = FeatureVector::zeros(schema.len());

    let day_of_week = selection.day.index();
    let is_peak = is_peak_hour(selection.hour);
    let is_weekend = selection.day.is_weekend();

    vector.set(schema.position("hour"), selection.hour as f64);
    vector.set(schema.position("day_of_week"), day_of_week as f64);
    vector.set(schema.position("is_weekend"), bool_value(is_weekend));
    vector.set(schema.position("is_peak"), bool_value(is_peak));

    let line_idx = schema.position(&line_column(&selection.line));
    vector.set(line_idx, 1.0);

    AssembledVector {
        vector,
        day_of_week,
        is_peak,
        is_weekend,
        line_matched: line_idx.is_some(),
    }
}

fn bool_value(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

mod assemble;
mod names;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

pub use assemble::{AssembledVector, FeatureVector, assemble};
pub use names::{readable_name, title_case};

pub const BASE_FEATURES: [&str; 4] = ["hour", "day_of_week", "is_weekend", "is_peak"];
pub const LINE_PREFIX: &str = "line_";
pub const CAUSE_PREFIX: &str = "cause_category_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday=0 … Sunday=6.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn is_weekend(self) -> bool {
        self.index() >= 5
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        for day in Weekday::ALL {
            if day.name().eq_ignore_ascii_case(wanted) {
                return Ok(day);
            }
        }
        bail!("unknown weekday '{}'", s)
    }
}

/// Morning (07-10) and evening (16-19) commute bands.
pub fn is_peak_hour(hour: u8) -> bool {
    matches!(hour, 7..=10 | 16..=19)
}

/// Raw operator selections for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub line: String,
    pub hour: u8,
    pub day: Weekday,
}

/// Ordered model input columns with a name lookup built once.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Base features first, then every `line_*` / `cause_category_*` header in
    /// dataset order.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let mut names: Vec<String> = BASE_FEATURES.iter().map(|s| s.to_string()).collect();
        for header in headers {
            let header = header.as_ref();
            if header.starts_with(LINE_PREFIX) || header.starts_with(CAUSE_PREFIX) {
                names.push(header.to_string());
            }
        }
        Self::from_names(names)
    }

    pub fn from_names(names: Vec<String>) -> Result<Self> {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                bail!("duplicate feature column '{}'", name);
            }
        }
        Ok(Self { names, index })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name_at(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(String::as_str)
    }

    /// Selectable lines: `line_*` suffixes, sorted.
    pub fn line_choices(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .names
            .iter()
            .filter_map(|n| n.strip_prefix(LINE_PREFIX))
            .map(|s| s.to_string())
            .collect();
        lines.sort();
        lines
    }
}

pub fn line_column(line: &str) -> String {
    format!("{}{}", LINE_PREFIX, line)
}

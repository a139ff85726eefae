use std::collections::HashMap;

use crate::scores::CauseCount;

pub const DELAY_REASON_COLUMN: &str = "delay_reason";
pub const TOP_CAUSES: usize = 5;

/// Most frequent non-empty values, count descending. Equal counts keep the
/// order in which the values first appear.
pub fn top_causes<'a, I>(values: I, limit: usize) -> Vec<CauseCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&'a str, (u64, usize)> = HashMap::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let next_rank = counts.len();
        counts.entry(value).or_insert((0, next_rank)).0 += 1;
    }

    let mut tally: Vec<(&str, u64, usize)> = counts
        .into_iter()
        .map(|(cause, (count, first_seen))| (cause, count, first_seen))
        .collect();
    tally.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    tally.truncate(limit);

    tally
        .into_iter()
        .map(|(cause, count, _)| CauseCount {
            cause: cause.to_string(),
            count,
        })
        .collect()
}

/// Human-readable label for a feature column, e.g. `line_YU` -> `Line Yu`,
/// `cause_category_Mechanical` -> `Cause Mechanical`.
pub fn readable_name(feature: &str) -> String {
    let spaced = feature
        .replace('_', " ")
        .replace("cause category", "cause")
        .replace("line", "Line");
    title_case(&spaced)
}

/// Upper-cases the first cased character of every run of cased characters and
/// lower-cases the rest of the run.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}

/// Cell contents treated as missing, matching the pandas `read_csv` defaults.
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingCell {
    Missing,
    Value(f64),
    Invalid,
}

pub fn is_missing(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || NA_TOKENS.contains(&trimmed)
}

pub fn classify_cell(raw: &str) -> RatingCell {
    if is_missing(raw) {
        return RatingCell::Missing;
    }
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_nan() => RatingCell::Missing,
        Ok(v) => RatingCell::Value(v),
        Err(_) => RatingCell::Invalid,
    }
}

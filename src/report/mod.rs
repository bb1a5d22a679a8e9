use serde::Serialize;

use crate::model::{Aspect, System};

pub mod json;
pub mod text;

pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

#[derive(Debug, Clone, Serialize)]
pub struct SystemSummary {
    pub system: System,
    pub label: &'static str,
    pub position: usize,
    pub n: usize,
    pub mean: f64,
    pub median: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    pub left: System,
    pub right: System,
    pub t: f64,
    pub df: f64,
    pub p_value: f64,
    pub p_text: String,
    pub significant: bool,
    pub bracket_top: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelSummary {
    pub aspect: Aspect,
    pub title: &'static str,
    pub systems: Vec<SystemSummary>,
    pub comparisons: Vec<ComparisonSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub tool: String,
    pub version: String,
    pub category: String,
    pub style: String,
    pub n_rows: usize,
    pub image: String,
    pub panels: Vec<PanelSummary>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Two-digit scientific notation with a signed, zero-padded exponent
/// (`1.32e-02`, `1.00e+00`). Non-finite values print as `nan`, `inf`.
pub fn format_p_value(p: f64) -> String {
    if p.is_nan() {
        return "nan".to_string();
    }
    if p.is_infinite() {
        return if p > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let raw = format!("{p:.2e}");
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    match exp.parse::<i32>() {
        Ok(exp) => format!(
            "{mantissa}e{}{:02}",
            if exp < 0 { '-' } else { '+' },
            exp.abs()
        ),
        Err(_) => raw,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

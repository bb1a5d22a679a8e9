use serde::Serialize;

use crate::stats::{mean, percentile_linear, sorted};

const WHISKER_IQR: f64 = 1.5;

/// Summary behind one box: quartiles, whisker ends and the points beyond them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub n: usize,
    pub mean: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub fliers: Vec<f64>,
}

/// Whiskers reach the furthest datum within 1.5 IQR of the box edges.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }
    let data = sorted(values);
    let q1 = percentile_linear(&data, 0.25);
    let median = percentile_linear(&data, 0.5);
    let q3 = percentile_linear(&data, 0.75);
    let iqr = q3 - q1;
    let low_fence = q1 - WHISKER_IQR * iqr;
    let high_fence = q3 + WHISKER_IQR * iqr;

    let whisker_low = data
        .iter()
        .copied()
        .find(|&v| v >= low_fence)
        .unwrap_or(q1)
        .min(q1);
    let whisker_high = data
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= high_fence)
        .unwrap_or(q3)
        .max(q3);

    let fliers = data
        .iter()
        .copied()
        .filter(|&v| v < whisker_low || v > whisker_high)
        .collect();

    Some(BoxStats {
        n: data.len(),
        mean: mean(&data),
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        fliers,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/boxstats.rs"]
mod tests;

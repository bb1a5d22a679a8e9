use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::stats::{StatsError, mean, sample_variance};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTestResult {
    pub t: f64,
    pub df: f64,
    pub p_value: f64,
}

/// Independent two-sample t-test with pooled variance, two-sided.
///
/// Zero pooled variance yields `t = ±inf, p = 0` for different means and
/// `t = NaN, p = NaN` for equal means.
pub fn ttest_ind(a: &[f64], b: &[f64]) -> Result<TTestResult, StatsError> {
    if a.len() < 2 || b.len() < 2 {
        return Err(StatsError::InsufficientSamples {
            left: a.len(),
            right: b.len(),
        });
    }
    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    let df = n1 + n2 - 2.0;

    let pooled = ((n1 - 1.0) * sample_variance(a) + (n2 - 1.0) * sample_variance(b)) / df;
    let denom = (pooled * (1.0 / n1 + 1.0 / n2)).sqrt();
    let t = (mean(a) - mean(b)) / denom;

    let p_value = two_sided_p(t, df)?;
    Ok(TTestResult { t, df, p_value })
}

fn two_sided_p(t: f64, df: f64) -> Result<f64, StatsError> {
    if t.is_nan() {
        return Ok(f64::NAN);
    }
    if t.is_infinite() {
        return Ok(0.0);
    }
    let dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::Distribution(e.to_string()))?;
    Ok((2.0 * dist.sf(t.abs())).min(1.0))
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/ttest.rs"]
mod tests;

use crate::report::CategorySummary;

/// Non-finite statistics are written as `null`.
pub fn render_summary_json(summary: &CategorySummary) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(summary)?;
    out.push('\n');
    Ok(out)
}

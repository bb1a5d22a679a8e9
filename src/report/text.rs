use crate::report::{CategorySummary, PanelSummary, format_f64_6};

pub fn render_summary_text(summary: &CategorySummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Ratings comparison: {} ({} rows, style {})\n",
        summary.category, summary.n_rows, summary.style
    ));
    out.push_str(&format!("Image: {}\n", summary.image));
    out.push_str(&"=".repeat(40));
    out.push('\n');

    for panel in &summary.panels {
        out.push('\n');
        push_panel(&mut out, panel);
    }
    out
}

fn push_panel(out: &mut String, panel: &PanelSummary) {
    out.push_str(&format!("{}\n", panel.title));
    if panel.systems.is_empty() {
        out.push_str("  no ratings\n");
        return;
    }
    for s in &panel.systems {
        out.push_str(&format!(
            "  {:<18} n={:<4} mean={} median={}\n",
            s.label,
            s.n,
            format_f64_6(s.mean),
            format_f64_6(s.median)
        ));
    }
    if panel.comparisons.is_empty() {
        out.push_str("  no comparisons (fewer than two systems)\n");
    }
    for c in &panel.comparisons {
        out.push_str(&format!(
            "  {} vs {}: t={} df={} p = {}{}\n",
            c.left.label(),
            c.right.label(),
            format_f64_6(c.t),
            c.df,
            c.p_text,
            if c.significant { " *" } else { "" }
        ));
    }
}

use std::fs;
use std::path::Path;

use tracing::info;

use crate::model::PlotStyle;
use crate::pipeline::PipelineError;
use crate::pipeline::stage2_select::Stage2Output;
use crate::pipeline::stage3_compare::Stage3Output;
use crate::report::json::render_summary_json;
use crate::report::{
    CategorySummary, ComparisonSummary, PanelSummary, SIGNIFICANCE_LEVEL, SystemSummary,
    format_p_value,
};
use crate::stats::{mean, median};

pub fn build_summary(
    stage2: &Stage2Output,
    stage3: &Stage3Output,
    style: &PlotStyle,
    image_path: &Path,
) -> CategorySummary {
    let panels = stage2
        .panels
        .iter()
        .map(|panel| PanelSummary {
            aspect: panel.aspect,
            title: panel.aspect.title(),
            systems: panel
                .boxes
                .iter()
                .map(|b| SystemSummary {
                    system: b.system,
                    label: b.system.label(),
                    position: b.position,
                    n: b.ratings.len(),
                    mean: mean(&b.ratings),
                    median: median(&b.ratings),
                })
                .collect(),
            comparisons: stage3
                .comparisons_for(panel.aspect)
                .iter()
                .map(|c| ComparisonSummary {
                    left: c.left,
                    right: c.right,
                    t: c.result.t,
                    df: c.result.df,
                    p_value: c.result.p_value,
                    p_text: format_p_value(c.result.p_value),
                    significant: c.result.p_value < SIGNIFICANCE_LEVEL,
                    bracket_top: c.bracket.top(),
                })
                .collect(),
        })
        .collect();

    CategorySummary {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        category: stage2.category.clone(),
        style: style.name.to_string(),
        n_rows: stage2.n_rows,
        image: image_path.display().to_string(),
        panels,
    }
}

pub fn log_summary(summary: &CategorySummary) {
    for panel in &summary.panels {
        for c in &panel.comparisons {
            info!(
                "{} / {}: {} vs {} t={:.6} p={}",
                summary.category,
                panel.aspect.key(),
                c.left.label(),
                c.right.label(),
                c.t,
                c.p_text
            );
        }
    }
}

pub fn write_summary_json(summary: &CategorySummary, path: &Path) -> Result<(), PipelineError> {
    let json = render_summary_json(summary)?;
    fs::write(path, json)?;
    info!("summary written to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::input::{InputError, RatingsTable};
use crate::model::PlotStyle;
use crate::report::CategorySummary;
use crate::stats::StatsError;

pub mod stage2_select;
pub mod stage3_compare;
pub mod stage4_render;
pub mod stage5_report;

use stage2_select::run_stage2;
use stage3_compare::run_stage3;
use stage4_render::{RenderError, build_scene, render_png};
use stage5_report::{build_summary, log_summary, write_summary_json};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryOptions {
    pub summary_json: bool,
}

/// Stages 2-5 for one intent category: select, compare, render, report.
pub fn run_category(
    table: &RatingsTable,
    category: &str,
    style: &PlotStyle,
    out_dir: &Path,
    options: CategoryOptions,
) -> Result<CategorySummary, PipelineError> {
    info!("plotting category {category} with {} style", style.name);

    let stage2 = run_stage2(table, category, style.label_policy)?;
    let stage3 = run_stage3(&stage2)?;
    info!(
        "{category}: {} rows, {} comparisons",
        stage2.n_rows,
        stage3.n_brackets()
    );

    fs::create_dir_all(out_dir)?;
    let image_path = out_dir.join(style.image_file_name(category));
    let scene = build_scene(&stage2, &stage3);
    render_png(&scene, style, &image_path)?;

    let summary = build_summary(&stage2, &stage3, style, &image_path);
    log_summary(&summary);
    if options.summary_json {
        write_summary_json(&summary, &out_dir.join(style.summary_file_name(category)))?;
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;

use tracing::{debug, warn};

use crate::input::{InputError, RatingsTable};
use crate::model::{Aspect, LabelPolicy, System, aspect_order, system_order};

#[derive(Debug, Clone)]
pub struct SystemBox {
    pub system: System,
    /// 1-based x position of the box within its panel.
    pub position: usize,
    pub label: Option<&'static str>,
    pub ratings: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct AspectPanel {
    pub aspect: Aspect,
    pub boxes: Vec<SystemBox>,
}

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub category: String,
    pub n_rows: usize,
    pub panels: Vec<AspectPanel>,
}

pub fn run_stage2(
    table: &RatingsTable,
    category: &str,
    policy: LabelPolicy,
) -> Result<Stage2Output, InputError> {
    let view = table.category(category);
    if view.is_empty() {
        warn!("no rows for intent category {category}; panels will be empty");
    }

    let mut panels = Vec::with_capacity(aspect_order().len());
    for &aspect in aspect_order() {
        let mut boxes = Vec::new();
        for &system in system_order() {
            let column = aspect.column(system);
            let Some(series) = view.series(&column)? else {
                debug!("column {column} absent; skipping {}", system.label());
                continue;
            };
            if series.values.is_empty() {
                debug!(
                    "column {} has no ratings for {category} ({} missing)",
                    series.column, series.dropped
                );
                continue;
            }
            let label = policy.label_for(system, category);
            if label.is_none() {
                warn!(
                    "{} has ratings in {column} for {category} but the label policy leaves its box unlabeled",
                    system.label()
                );
            }
            boxes.push(SystemBox {
                system,
                position: boxes.len() + 1,
                label,
                ratings: series.values,
            });
        }
        panels.push(AspectPanel { aspect, boxes });
    }

    Ok(Stage2Output {
        category: category.to_string(),
        n_rows: view.len(),
        panels,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_select.rs"]
mod tests;

use tracing::debug;

use crate::model::{Aspect, Rgb, System};
use crate::pipeline::stage2_select::{AspectPanel, Stage2Output};
use crate::stats::{StatsError, TTestResult, ttest_ind};

/// Where a comparison's dashed bracket sits: it starts at `base_y` over both
/// boxes and rises by `0.05 + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketSpec {
    pub base_y: f32,
    pub offset: f32,
    pub color: Rgb,
}

impl BracketSpec {
    pub fn rise(&self) -> f32 {
        0.05 + self.offset
    }

    pub fn top(&self) -> f32 {
        self.base_y + self.rise()
    }
}

/// Pairs of box positions with their bracket placement. The first pair is
/// tested whenever two boxes exist, the rest only with three.
const COMPARISON_PLAN: [(usize, usize, BracketSpec); 3] = [
    (
        1,
        2,
        BracketSpec {
            base_y: 5.4,
            offset: 0.1,
            color: Rgb::BLUE,
        },
    ),
    (
        1,
        3,
        BracketSpec {
            base_y: 5.6,
            offset: 0.25,
            color: Rgb::GREEN,
        },
    ),
    (
        2,
        3,
        BracketSpec {
            base_y: 5.3,
            offset: 0.3,
            color: Rgb::RED,
        },
    ),
];

#[derive(Debug, Clone)]
pub struct Comparison {
    pub left: System,
    pub right: System,
    pub left_pos: usize,
    pub right_pos: usize,
    pub result: TTestResult,
    pub bracket: BracketSpec,
}

#[derive(Debug, Clone)]
pub struct PanelComparisons {
    pub aspect: Aspect,
    pub comparisons: Vec<Comparison>,
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub panels: Vec<PanelComparisons>,
}

impl Stage3Output {
    pub fn n_brackets(&self) -> usize {
        self.panels.iter().map(|p| p.comparisons.len()).sum()
    }

    /// Comparisons drawn on the `aspect` panel; empty when it has none.
    pub fn comparisons_for(&self, aspect: Aspect) -> &[Comparison] {
        self.panels
            .iter()
            .find(|p| p.aspect == aspect)
            .map(|p| p.comparisons.as_slice())
            .unwrap_or(&[])
    }
}

pub fn run_stage3(stage2: &Stage2Output) -> Result<Stage3Output, StatsError> {
    let mut panels = Vec::with_capacity(stage2.panels.len());
    for panel in &stage2.panels {
        panels.push(PanelComparisons {
            aspect: panel.aspect,
            comparisons: compare_panel(panel)?,
        });
    }
    Ok(Stage3Output { panels })
}

pub fn compare_panel(panel: &AspectPanel) -> Result<Vec<Comparison>, StatsError> {
    let n_pairs = match panel.boxes.len() {
        0 | 1 => 0,
        2 => 1,
        _ => COMPARISON_PLAN.len(),
    };

    let mut out = Vec::with_capacity(n_pairs);
    for &(left_pos, right_pos, bracket) in &COMPARISON_PLAN[..n_pairs] {
        let left = &panel.boxes[left_pos - 1];
        let right = &panel.boxes[right_pos - 1];
        let result = ttest_ind(&left.ratings, &right.ratings)?;
        debug!(
            "{}: {} vs {} t={} p={}",
            panel.aspect.key(),
            left.system.label(),
            right.system.label(),
            result.t,
            result.p_value
        );
        out.push(Comparison {
            left: left.system,
            right: right.system,
            left_pos,
            right_pos,
            result,
            bracket,
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_compare.rs"]
mod tests;

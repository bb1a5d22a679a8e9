use crate::model::System;

pub const FAQ_CATEGORY: &str = "faq";

/// Fixed rating axis. The space above 5 holds the p-value brackets.
pub const Y_MIN: f32 = 0.5;
pub const Y_MAX: f32 = 6.2;
pub const Y_TICKS: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Every included box is labelled with its system name.
    PerIndex,
    /// Response Selector is only labelled for the faq category.
    ThirdOnlyForFaq,
}

impl LabelPolicy {
    pub fn label_for(self, system: System, category: &str) -> Option<&'static str> {
        match (self, system) {
            (LabelPolicy::ThirdOnlyForFaq, System::ResponseSelector) if category != FAQ_CATEGORY => {
                None
            }
            _ => Some(system.label()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlotStyle {
    pub name: &'static str,
    pub file_suffix: &'static str,
    pub fig_width_in: f64,
    pub fig_height_in: f64,
    pub dpi: u32,
    pub label_policy: LabelPolicy,
    pub title_pt: f64,
    pub axis_label_pt: f64,
    pub tick_pt: f64,
    pub annotation_pt: f64,
    pub axis_label_pad_pt: f64,
    pub box_line_pt: f64,
    pub median_line_pt: f64,
    pub bracket_line_pt: f64,
    /// Box width in x-axis units; boxes sit at integer positions.
    pub box_width: f32,
    pub flier_radius_pt: f64,
    pub dash_pt: f64,
    pub gap_pt: f64,
}

impl PlotStyle {
    pub fn fixed_v1() -> Self {
        Self {
            name: "fixed",
            file_suffix: "_fixed",
            fig_width_in: 30.0,
            fig_height_in: 10.0,
            dpi: 300,
            label_policy: LabelPolicy::ThirdOnlyForFaq,
            title_pt: 28.0,
            axis_label_pt: 26.0,
            tick_pt: 24.0,
            annotation_pt: 18.0,
            axis_label_pad_pt: 20.0,
            box_line_pt: 1.0,
            median_line_pt: 2.0,
            bracket_line_pt: 1.0,
            box_width: 0.5,
            flier_radius_pt: 3.0,
            dash_pt: 3.7,
            gap_pt: 1.6,
        }
    }

    pub fn standard_v1() -> Self {
        let mut base = Self::fixed_v1();
        base.name = "standard";
        base.file_suffix = "";
        base.fig_width_in = 18.0;
        base.fig_height_in = 6.0;
        base.dpi = 200;
        base.label_policy = LabelPolicy::PerIndex;
        base.title_pt = 20.0;
        base.axis_label_pt = 18.0;
        base.tick_pt = 16.0;
        base.annotation_pt = 14.0;
        base.axis_label_pad_pt = 10.0;
        base.box_line_pt = 2.0;
        base.median_line_pt = 3.0;
        base.bracket_line_pt = 2.0;
        base
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.fig_width_in * self.dpi as f64).round() as u32,
            (self.fig_height_in * self.dpi as f64).round() as u32,
        )
    }

    /// Points to pixels at this style's resolution, never below one pixel.
    pub fn px(&self, pt: f64) -> u32 {
        ((pt * self.dpi as f64 / 72.0).round() as u32).max(1)
    }

    pub fn image_file_name(&self, category: &str) -> String {
        format!("{category}_plot_with_pvalues{}.png", self.file_suffix)
    }

    pub fn summary_file_name(&self, category: &str) -> String {
        format!("{category}_pvalues{}.json", self.file_suffix)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/style.rs"]
mod tests;

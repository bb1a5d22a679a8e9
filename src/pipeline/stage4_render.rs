use std::path::Path;

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf32;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};
use thiserror::Error;
use tracing::info;

use crate::model::style::{Y_MAX, Y_MIN, Y_TICKS};
use crate::model::{PlotStyle, Rgb};
use crate::pipeline::stage2_select::Stage2Output;
use crate::pipeline::stage3_compare::Stage3Output;
use crate::report::format_p_value;
use crate::stats::{BoxStats, box_stats};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

#[derive(Debug, Clone)]
pub struct BoxGlyph {
    pub position: f32,
    pub label: String,
    pub color: Rgb,
    pub stats: BoxStats,
}

#[derive(Debug, Clone)]
pub struct BracketGlyph {
    pub path: [(f32, f32); 4],
    pub color: Rgb,
    pub text: String,
    pub text_at: (f32, f32),
}

#[derive(Debug, Clone)]
pub struct PanelScene {
    pub title: &'static str,
    pub x_range: (f32, f32),
    pub boxes: Vec<BoxGlyph>,
    pub brackets: Vec<BracketGlyph>,
}

#[derive(Debug, Clone)]
pub struct FigureScene {
    pub category: String,
    pub panels: Vec<PanelScene>,
}

pub fn build_scene(stage2: &Stage2Output, stage3: &Stage3Output) -> FigureScene {
    let mut panels = Vec::with_capacity(stage2.panels.len());
    for panel in &stage2.panels {
        let boxes: Vec<BoxGlyph> = panel
            .boxes
            .iter()
            .filter_map(|b| {
                box_stats(&b.ratings).map(|stats| BoxGlyph {
                    position: b.position as f32,
                    label: b.label.unwrap_or_default().to_string(),
                    color: b.system.color(),
                    stats,
                })
            })
            .collect();

        let brackets = stage3
            .comparisons_for(panel.aspect)
            .iter()
            .map(|c| {
                let x1 = c.left_pos as f32;
                let x2 = c.right_pos as f32;
                let y = c.bracket.base_y;
                let top = c.bracket.top();
                BracketGlyph {
                    path: [(x1, y), (x1, top), (x2, top), (x2, y)],
                    color: c.bracket.color,
                    text: format!("p = {}", format_p_value(c.result.p_value)),
                    text_at: ((x1 + x2) * 0.5, top),
                }
            })
            .collect();

        let n = panel.boxes.len().max(1) as f32;
        panels.push(PanelScene {
            title: panel.aspect.title(),
            x_range: (0.5, n + 0.5),
            boxes,
            brackets,
        });
    }
    FigureScene {
        category: stage2.category.clone(),
        panels,
    }
}

/// Splits a polyline into dash segments. Lengths are measured in pixels via
/// `px_per_unit`; the dash pattern carries over corners.
pub fn dashed_segments(
    path: &[(f32, f32)],
    px_per_unit: (f32, f32),
    dash_px: f32,
    gap_px: f32,
) -> Vec<[(f32, f32); 2]> {
    if dash_px <= 0.0 || gap_px <= 0.0 {
        return path.windows(2).map(|w| [w[0], w[1]]).collect();
    }
    let mut out = Vec::new();
    let mut on = true;
    let mut remaining = dash_px;
    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        let dx = (b.0 - a.0) * px_per_unit.0;
        let dy = (b.1 - a.1) * px_per_unit.1;
        let len = (dx * dx + dy * dy).sqrt();
        if len <= 0.0 {
            continue;
        }
        let lerp = |t: f32| (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t);
        let mut walked = 0.0f32;
        while walked < len {
            let step = remaining.min(len - walked);
            if on {
                out.push([lerp(walked / len), lerp((walked + step) / len)]);
            }
            walked += step;
            remaining -= step;
            if remaining <= 0.0 {
                on = !on;
                remaining = if on { dash_px } else { gap_px };
            }
        }
    }
    out
}

/// Axis ticks of one panel: ratings 1..=5 on y, one per box on x.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTicks {
    pub x: Vec<(f32, String)>,
    pub y: Vec<(f32, String)>,
}

pub fn axis_ticks(panel: &PanelScene) -> AxisTicks {
    AxisTicks {
        x: panel
            .boxes
            .iter()
            .map(|b| (b.position, b.label.clone()))
            .collect(),
        y: Y_TICKS.iter().map(|&y| (y, format!("{y:.0}"))).collect(),
    }
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

fn font(style: &PlotStyle, pt: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, style.px(pt) as f64, FontStyle::Normal)
}

pub fn render_png(scene: &FigureScene, style: &PlotStyle, path: &Path) -> Result<(), RenderError> {
    let root = BitMapBackend::new(path, style.pixel_size()).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let areas = root.split_evenly((1, scene.panels.len().max(1)));
    for (area, panel) in areas.iter().zip(&scene.panels) {
        draw_panel(area, panel, style)?;
    }

    root.present().map_err(draw_err)?;
    info!("{} plot saved to {}", scene.category, path.display());
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &PanelScene,
    style: &PlotStyle,
) -> Result<(), RenderError> {
    let (x0, x1) = panel.x_range;

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, font(style, style.title_pt))
        .margin(style.px(style.axis_label_pad_pt))
        .x_label_area_size(style.px(style.tick_pt * 2.5))
        .y_label_area_size(style.px(style.tick_pt + style.axis_label_pt + style.axis_label_pad_pt))
        .build_cartesian_2d(x0..x1, Y_MIN..Y_MAX)
        .map_err(draw_err)?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(x0, Y_MAX), (x0, Y_MIN), (x1, Y_MIN)],
            BLACK.stroke_width(style.px(style.box_line_pt)),
        )))
        .map_err(draw_err)?;
    draw_ticks(&chart, area, panel, style)?;

    let box_line = style.px(style.box_line_pt);
    let half = style.box_width / 2.0;
    for glyph in &panel.boxes {
        let x = glyph.position;
        let s = &glyph.stats;
        let (q1, med, q3) = (s.q1 as f32, s.median as f32, s.q3 as f32);
        let (lo, hi) = (s.whisker_low as f32, s.whisker_high as f32);

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - half, q1), (x + half, q3)],
                rgb(glyph.color).filled(),
            )))
            .map_err(draw_err)?;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - half, q1), (x + half, q3)],
                BLACK.stroke_width(box_line),
            )))
            .map_err(draw_err)?;

        let whiskers = [
            vec![(x, q3), (x, hi)],
            vec![(x, q1), (x, lo)],
            vec![(x - half / 2.0, hi), (x + half / 2.0, hi)],
            vec![(x - half / 2.0, lo), (x + half / 2.0, lo)],
        ];
        chart
            .draw_series(
                whiskers
                    .into_iter()
                    .map(|pts| PathElement::new(pts, BLACK.stroke_width(box_line))),
            )
            .map_err(draw_err)?;

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x - half, med), (x + half, med)],
                BLACK.stroke_width(style.px(style.median_line_pt)),
            )))
            .map_err(draw_err)?;

        chart
            .draw_series(s.fliers.iter().map(|&f| {
                Circle::new(
                    (x, f as f32),
                    style.px(style.flier_radius_pt),
                    BLACK.stroke_width(box_line),
                )
            }))
            .map_err(draw_err)?;
    }

    let (pw, ph) = chart.plotting_area().dim_in_pixel();
    let px_per_unit = (pw as f32 / (x1 - x0), ph as f32 / (Y_MAX - Y_MIN));
    for bracket in &panel.brackets {
        let color = rgb(bracket.color);
        let segments = dashed_segments(
            &bracket.path,
            px_per_unit,
            style.px(style.dash_pt) as f32,
            style.px(style.gap_pt) as f32,
        );
        chart
            .draw_series(segments.into_iter().map(|[a, b]| {
                PathElement::new(vec![a, b], color.stroke_width(style.px(style.bracket_line_pt)))
            }))
            .map_err(draw_err)?;

        let text_style = font(style, style.annotation_pt)
            .color(&color)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(std::iter::once(Text::new(
                bracket.text.clone(),
                bracket.text_at,
                text_style,
            )))
            .map_err(draw_err)?;
    }

    Ok(())
}

/// Tick marks, their labels and the y axis title, drawn in panel pixels so
/// they land exactly on the rating ticks and box positions.
fn draw_ticks<DB: DrawingBackend>(
    chart: &ChartContext<'_, DB, Cartesian2d<RangedCoordf32, RangedCoordf32>>,
    area: &DrawingArea<DB, Shift>,
    panel: &PanelScene,
    style: &PlotStyle,
) -> Result<(), RenderError> {
    let (base_x, base_y) = area.get_base_pixel();
    let local = |x: f32, y: f32| {
        let (px, py) = chart.backend_coord(&(x, y));
        (px - base_x, py - base_y)
    };
    let tick_len = style.px(style.tick_pt * 0.35) as i32;
    let pad = style.px(style.tick_pt * 0.2) as i32;
    let line = BLACK.stroke_width(style.px(style.box_line_pt));
    let ticks = axis_ticks(panel);

    for (y, text) in &ticks.y {
        let (px, py) = local(panel.x_range.0, *y);
        area.draw(&PathElement::new(vec![(px - tick_len, py), (px, py)], line))
            .map_err(draw_err)?;
        let text_style = font(style, style.tick_pt)
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Center));
        area.draw(&Text::new(text.clone(), (px - tick_len - pad, py), text_style))
            .map_err(draw_err)?;
    }

    for (x, text) in &ticks.x {
        let (px, py) = local(*x, Y_MIN);
        area.draw(&PathElement::new(vec![(px, py), (px, py + tick_len)], line))
            .map_err(draw_err)?;
        if text.is_empty() {
            continue;
        }
        let text_style = font(style, style.tick_pt)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top));
        area.draw(&Text::new(text.clone(), (px, py + tick_len + pad), text_style))
            .map_err(draw_err)?;
    }

    let (_, top) = local(panel.x_range.0, Y_MAX);
    let (_, bottom) = local(panel.x_range.0, Y_MIN);
    let desc_style = font(style, style.axis_label_pt)
        .transform(FontTransform::Rotate270)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let desc_x = style.px(style.axis_label_pt) as i32 / 2 + pad;
    area.draw(&Text::new("Ratings", (desc_x, (top + bottom) / 2), desc_style))
        .map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_render.rs"]
mod tests;

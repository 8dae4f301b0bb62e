use std::hash::{DefaultHasher, Hash, Hasher};

use colorgrad::Gradient;
use eframe::egui::{Color32, Ui, Vec2b};
use egui_plot::{
    AxisHints, Corner, GridMark, HPlacement, Legend, Line, LineStyle, Plot, PlotPoints, Points,
};

use crate::config::PLOT_CONFIG;
use crate::engine::{CurveRole, RenderedCurve};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_value, format_year};
use crate::utils::padded_range;

/// Per-curve styling and the view bounds, rebuilt only when the curve set changes.
#[derive(Clone)]
pub struct PlotCache {
    pub curves_hash: u64,
    pub colors: Vec<Color32>,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
}

pub struct PlotView {
    cache: Option<PlotCache>,
    gradient: Option<colorgrad::LinearGradient>,
}

impl Default for PlotView {
    fn default() -> Self {
        Self::new()
    }
}

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if raw_step <= 0.0 {
        return 1.0;
    }
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Years are whole numbers: never step below 1
    (nice_step * mag).max(1.0)
}

fn hash_curves(curves: &[RenderedCurve]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for curve in curves {
        curve.label.hash(&mut hasher);
        curve.is_unsaved_current().hash(&mut hasher);
        for p in &curve.points {
            p.year.hash(&mut hasher);
            p.value.to_bits().hash(&mut hasher);
        }
    }
    hasher.finish()
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis.clone())
        .formatter(|grid_mark, _range| format_year(grid_mark.value))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis.clone())
        .formatter(|grid_mark, _range| format_value(grid_mark.value))
        .placement(HPlacement::Left)
}

impl PlotView {
    pub fn new() -> Self {
        let gradient = colorgrad::GradientBuilder::new()
            .html_colors(PLOT_CONFIG.series_gradient_colors)
            .build::<colorgrad::LinearGradient>();
        if let Err(e) = &gradient {
            log::error!("Series gradient unavailable, falling back to flat colours: {}", e);
        }
        Self {
            cache: None,
            gradient: gradient.ok(),
        }
    }

    /// Colour for the i-th of `n` stored curves, oldest at the cool end of the gradient.
    fn stored_color(&self, i: usize, n: usize) -> Color32 {
        let t = if n <= 1 {
            1.0
        } else {
            i as f32 / (n - 1) as f32
        };
        match &self.gradient {
            Some(grad) => to_egui_color(grad.at(t)),
            None => PLOT_CONFIG.color_text_primary,
        }
    }

    fn calculate_plot_data(&mut self, curves: &[RenderedCurve]) -> PlotCache {
        let current_hash = hash_curves(curves);
        if let Some(cache) = &self.cache {
            if cache.curves_hash == current_hash {
                return cache.clone();
            }
        }

        crate::trace_time!("Rebuild Comparison Plot Cache", 500, {
            let stored_total = curves
                .iter()
                .filter(|c| matches!(c.role, CurveRole::Stored(_)))
                .count();

            let mut stored_seen = 0;
            let colors = curves
                .iter()
                .map(|c| match c.role {
                    CurveRole::Stored(_) => {
                        let color = self.stored_color(stored_seen, stored_total);
                        stored_seen += 1;
                        color
                    }
                    CurveRole::Current { .. } => PLOT_CONFIG.current_curve_color,
                })
                .collect();

            let max_year = curves
                .iter()
                .filter_map(|c| c.points.last().map(|p| p.year))
                .max()
                .unwrap_or(0) as f64;
            let x_bounds = (-PLOT_CONFIG.plot_x_padding, max_year + PLOT_CONFIG.plot_x_padding);

            let y_bounds = padded_range(
                curves.iter().flat_map(|c| c.points.iter().map(|p| p.value)),
                PLOT_CONFIG.plot_y_padding_pct,
            )
            .unwrap_or((0.0, 1.0));

            let cache = PlotCache {
                curves_hash: current_hash,
                colors,
                x_bounds,
                y_bounds,
            };
            self.cache = Some(cache.clone());
            cache
        })
    }

    pub fn show_comparison_plot(&mut self, ui: &mut Ui, curves: &[RenderedCurve]) {
        let cache = self.calculate_plot_data(curves);
        let (x_min, x_max) = cache.x_bounds;
        let (y_min, y_max) = cache.y_bounds;

        Plot::new("comparison_plot")
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .label_formatter(|name, value| {
                let year = value.x.round();
                if name.is_empty() {
                    format!("Year {}\n{}", format_year(year), format_value(value.y))
                } else {
                    format!("{}\nYear {}: {}", name, format_year(year), format_value(value.y))
                }
            })
            .x_grid_spacer(move |input| {
                let (min, max) = input.bounds;
                let step = calculate_adaptive_step(max - min, 10.0);
                let start = (min / step).ceil() as i64;
                let end = (max / step).floor() as i64;
                (start..=end)
                    .map(|i| GridMark {
                        value: i as f64 * step,
                        step_size: step,
                    })
                    .collect()
            })
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_drag(Vec2b { x: false, y: false })
            .allow_zoom(Vec2b { x: false, y: false })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                plot_ui.set_plot_bounds_y(y_min..=y_max);

                for (curve, color) in curves.iter().zip(cache.colors.iter().copied()) {
                    let series: Vec<[f64; 2]> =
                        curve.points.iter().map(|p| p.as_plot_point()).collect();

                    let (width, style) = match curve.role {
                        CurveRole::Stored(_) => (PLOT_CONFIG.stored_line_width, LineStyle::Solid),
                        CurveRole::Current { saved: true } => {
                            (PLOT_CONFIG.current_line_width, LineStyle::Solid)
                        }
                        CurveRole::Current { saved: false } => (
                            PLOT_CONFIG.current_line_width,
                            LineStyle::Dashed {
                                length: PLOT_CONFIG.unsaved_dash_length,
                            },
                        ),
                    };

                    // A zero-year horizon is a single point: without a marker it's invisible.
                    let show_markers = PLOT_CONFIG.point_radius > 0.0
                        && series.len() <= PLOT_CONFIG.max_points_with_markers;
                    if show_markers {
                        plot_ui.points(
                            Points::new(curve.label.as_str(), PlotPoints::new(series.clone()))
                                .radius(PLOT_CONFIG.point_radius)
                                .color(color),
                        );
                    }

                    plot_ui.line(
                        Line::new(curve.label.as_str(), PlotPoints::new(series))
                            .color(color)
                            .width(width)
                            .style(style),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AddMode, CalcKind, Params};
    use crate::engine::{Action, CompareState, dispatch, render_model};

    #[test]
    fn adaptive_step_is_whole_years() {
        assert_eq!(calculate_adaptive_step(1.0, 10.0), 1.0);
        assert_eq!(calculate_adaptive_step(0.0, 10.0), 1.0);
        assert_eq!(calculate_adaptive_step(51.0, 10.0), 5.0);
        assert_eq!(calculate_adaptive_step(20.0, 10.0), 2.0);
    }

    #[test]
    fn cache_reused_until_curves_change() {
        let mut view = PlotView::new();
        let mut state = CompareState::new(AddMode::OnChange);
        let a = Params::clamped(CalcKind::FutureValue, 10, 5);
        state = dispatch(state, a, Action::ParamsChanged);

        let model = render_model(&state, &a);
        let first = view.calculate_plot_data(&model.curves);
        let again = view.calculate_plot_data(&model.curves);
        assert_eq!(first.curves_hash, again.curves_hash);
        assert!(view.cache.is_some());

        let b = Params::clamped(CalcKind::FutureValue, 10, 9);
        state = dispatch(state, b, Action::ParamsChanged);
        let model = render_model(&state, &b);
        let rebuilt = view.calculate_plot_data(&model.curves);
        assert_ne!(first.curves_hash, rebuilt.curves_hash);
        assert_eq!(rebuilt.colors.len(), 2);
        assert_eq!(rebuilt.colors[1], PLOT_CONFIG.current_curve_color);
    }

    #[test]
    fn bounds_cover_horizon_and_values() {
        let mut view = PlotView::new();
        let state = CompareState::new(AddMode::Manual);
        let params = Params::clamped(CalcKind::FutureValue, 10, 5);
        let model = render_model(&state, &params);
        let cache = view.calculate_plot_data(&model.curves);
        assert!(cache.x_bounds.0 < 0.0 && cache.x_bounds.1 > 10.0);
        assert!(cache.y_bounds.0 < 100.0 && cache.y_bounds.1 > 162.89);
    }

    #[test]
    fn stored_colors_span_gradient() {
        let view = PlotView::new();
        let first = view.stored_color(0, 3);
        let last = view.stored_color(2, 3);
        assert_ne!(first, last);
    }
}

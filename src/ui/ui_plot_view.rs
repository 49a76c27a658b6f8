use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use eframe::egui::{self, Frame, Stroke, Visuals};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Plot};

use crate::config::CHART_CONFIG;
use crate::models::ChartSeries;
use crate::ui::plot_layers::{CandleLayer, EmaLineLayer, LayerContext, PlotLayer};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_axis_price;
use crate::utils::time_utils::epoch_sec_to_axis_label;

/// The fixed-size area the chart draws into. Keeps count of the charts
/// currently attached to it so callers can check that there is never more
/// than one.
#[derive(Debug, Clone)]
pub struct ChartSurface {
    pub width: f32,
    pub height: f32,
    attached: Arc<AtomicUsize>,
}

impl Default for ChartSurface {
    fn default() -> Self {
        Self {
            width: CHART_CONFIG.surface_width,
            height: CHART_CONFIG.surface_height,
            attached: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl ChartSurface {
    pub fn attached_charts(&self) -> usize {
        self.attached.load(Ordering::SeqCst)
    }

    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.width, self.height)
    }
}

/// A live chart bound to a surface. Created with both series already fed in;
/// dropping it releases the surface.
#[derive(Debug)]
pub struct PriceChart {
    /// Distinguishes this instance's plot memory (bounds, hover) from the last one
    plot_id: u64,
    series: ChartSeries,
    candle_width: f64,
    size: egui::Vec2,
    attached: Arc<AtomicUsize>,
}

impl PriceChart {
    pub fn attach(surface: &ChartSurface, series: ChartSeries, plot_id: u64) -> Self {
        let previous = surface.attached.fetch_add(1, Ordering::SeqCst);
        debug_assert_eq!(previous, 0, "chart attached to an occupied surface");

        let spacing = series.bar_spacing_sec(CHART_CONFIG.default_bar_spacing_sec) as f64;

        Self {
            plot_id,
            series,
            candle_width: spacing * CHART_CONFIG.candle_width_pct,
            size: surface.size(),
            attached: Arc::clone(&surface.attached),
        }
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let frame = Frame::new()
            .fill(CHART_CONFIG.background_color)
            .stroke(Stroke::new(1.0, CHART_CONFIG.grid_color));

        frame.show(ui, |ui| {
            // Light chart regardless of the surrounding theme
            let mut visuals = Visuals::light();
            visuals.override_text_color = Some(CHART_CONFIG.text_color);
            visuals.extreme_bg_color = CHART_CONFIG.background_color;
            visuals.widgets.noninteractive.bg_stroke.color = CHART_CONFIG.grid_color;
            ui.style_mut().visuals = visuals;

            self.show_plot(ui);
        });
    }

    fn show_plot(&self, ui: &mut egui::Ui) {
        let padding = self.candle_width;
        let (x_min, x_max) = self
            .series
            .time_range()
            .map(|(first, last)| (first as f64 - padding, last as f64 + padding))
            .unwrap_or((0.0, 1.0));
        let (y_min, y_max) = self.series.price_range().unwrap_or((0.0, 1.0));
        let y_margin = ((y_max - y_min) * 0.05).max(f64::EPSILON);

        Plot::new(("price_chart", self.plot_id))
            .width(self.size.x)
            .height(self.size.y)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .label_formatter(|_, _| String::new())
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                plot_ui.set_plot_bounds_y((y_min - y_margin)..=(y_max + y_margin));

                let ctx = LayerContext {
                    series: &self.series,
                    candle_width: self.candle_width,
                };

                // Back to front; EMA sits over the candles
                let layers: Vec<Box<dyn PlotLayer>> =
                    vec![Box::new(CandleLayer), Box::new(EmaLineLayer)];

                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}

impl Drop for PriceChart {
    fn drop(&mut self) {
        self.attached.fetch_sub(1, Ordering::SeqCst);
    }
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x().formatter(|grid_mark, _range| {
        epoch_sec_to_axis_label(
            grid_mark.value as i64,
            CHART_CONFIG.time_visible,
            CHART_CONFIG.seconds_visible,
        )
    })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.chart_y_axis)
        .formatter(|grid_mark, _range| format_axis_price(grid_mark.value))
        .placement(HPlacement::Right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{BAR_SPACING_SEC, bars};

    #[test]
    fn attach_and_drop_track_the_surface() {
        let surface = ChartSurface::default();
        let series = ChartSeries::from_history(&bars(4)).unwrap();

        let chart = PriceChart::attach(&surface, series, 1);
        assert_eq!(surface.attached_charts(), 1);
        assert_eq!(chart.size, egui::vec2(600.0, 300.0));
        assert_eq!(chart.candle_width, BAR_SPACING_SEC as f64 * 0.6);

        drop(chart);
        assert_eq!(surface.attached_charts(), 0);
    }

    #[test]
    fn single_bar_uses_default_spacing() {
        let surface = ChartSurface::default();
        let series = ChartSeries::from_history(&bars(1)).unwrap();

        let chart = PriceChart::attach(&surface, series, 1);

        assert_eq!(
            chart.candle_width,
            CHART_CONFIG.default_bar_spacing_sec as f64 * CHART_CONFIG.candle_width_pct
        );
    }
}

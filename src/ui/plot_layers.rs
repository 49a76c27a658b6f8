use eframe::egui::Stroke;
use egui_plot::{BoxElem, BoxPlot, BoxSpread, Line, PlotPoints, PlotUi};

use crate::config::CHART_CONFIG;
use crate::domain::CandleType;
use crate::models::{CandlePoint, ChartSeries, EmaPoint};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_axis_price;
use crate::utils::time_utils::epoch_sec_to_axis_label;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub series: &'a ChartSeries,
    /// Candle body width in plot units (seconds)
    pub candle_width: f64,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. CANDLESTICK LAYER
// ============================================================================
pub struct CandleLayer;

impl PlotLayer for CandleLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let boxes: Vec<BoxElem> = ctx
            .series
            .candles
            .iter()
            .map(|candle| candle_elem(candle, ctx.candle_width))
            .collect();

        let plot = BoxPlot::new(UI_TEXT.chart_candles, boxes)
            .element_formatter(Box::new(|elem, _plot| elem.name.clone()));

        plot_ui.box_plot(plot);
    }
}

fn candle_elem(candle: &CandlePoint, width: f64) -> BoxElem {
    let color = match candle.get_type() {
        CandleType::Bullish => CHART_CONFIG.bullish_color,
        CandleType::Bearish => CHART_CONFIG.bearish_color,
    };
    let (body_low, body_high) = candle.body_range();

    // Whiskers are the wicks, the box is the body.
    let spread = BoxSpread::new(
        candle.low,
        body_low,
        (body_low + body_high) / 2.0,
        body_high,
        candle.high,
    );

    BoxElem::new(candle.time as f64, spread)
        .name(candle_tooltip(candle))
        .box_width(width)
        .whisker_width(0.0)
        .fill(color)
        .stroke(Stroke::new(1.0, color))
}

fn candle_tooltip(candle: &CandlePoint) -> String {
    format!(
        "{}\nO {}  H {}\nL {}  C {}",
        epoch_sec_to_axis_label(candle.time, true, false),
        format_axis_price(candle.open),
        format_axis_price(candle.high),
        format_axis_price(candle.low),
        format_axis_price(candle.close),
    )
}

// ============================================================================
// 2. EMA55 LINE LAYER
// ============================================================================
pub struct EmaLineLayer;

impl PlotLayer for EmaLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for run in defined_runs(&ctx.series.ema) {
            let line = Line::new(UI_TEXT.chart_ema55, PlotPoints::new(run))
                .color(CHART_CONFIG.ema_line_color)
                .width(CHART_CONFIG.ema_line_width);
            plot_ui.line(line);
        }
    }
}

/// Splits the EMA series at missing values so the line has gaps, not bridges.
fn defined_runs(points: &[EmaPoint]) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for point in points {
        match point.value {
            Some(value) => current.push([point.time as f64, value]),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

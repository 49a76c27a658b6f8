//! Price chart visualization configuration

use eframe::egui::Color32;

use crate::utils::TimeUtils;

pub struct ChartConfig {
    /// Fixed drawing surface size (logical pixels)
    pub surface_width: f32,
    pub surface_height: f32,
    // Light theme
    pub background_color: Color32,
    pub text_color: Color32,
    pub grid_color: Color32,
    /// Horizontal axis shows time of day, not just dates
    pub time_visible: bool,
    pub seconds_visible: bool,
    // Candlestick series
    pub bullish_color: Color32,
    pub bearish_color: Color32,
    /// Candle body width as a fraction of the bar spacing
    pub candle_width_pct: f64,
    /// Bar spacing used when the history has a single bar (4h)
    pub default_bar_spacing_sec: i64,
    // EMA55 line series (secondary overlay)
    pub ema_line_color: Color32,
    pub ema_line_width: f32,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    surface_width: 600.0,
    surface_height: 300.0,
    background_color: Color32::WHITE,
    text_color: Color32::BLACK,
    grid_color: Color32::from_rgb(0xee, 0xee, 0xee),
    time_visible: true,
    seconds_visible: false,
    bullish_color: Color32::from_rgb(0x4c, 0xaf, 0x50), // Green
    bearish_color: Color32::from_rgb(0xf4, 0x43, 0x36), // Red
    candle_width_pct: 0.6,
    default_bar_spacing_sec: TimeUtils::S_IN_4_H,
    ema_line_color: Color32::from_rgb(0x82, 0xca, 0x9d), // Soft green
    ema_line_width: 2.0,
};

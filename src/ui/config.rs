use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub error: Color32,
    // Recommendation text, by kind
    pub recommend_buy: Color32,
    pub recommend_wait: Color32,
    pub recommend_neutral: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub symbol_input_width: f32,
    /// How often to repaint while a check is still waiting on the network
    pub poll_interval_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(90, 90, 90),
        heading: Color32::from_rgb(20, 20, 20),
        subsection_heading: Color32::from_rgb(60, 60, 60),
        central_panel: Color32::from_rgb(250, 250, 250),
        error: Color32::from_rgb(0xd3, 0x2f, 0x2f),
        recommend_buy: Color32::from_rgb(0x2e, 0x7d, 0x32),
        recommend_wait: Color32::from_rgb(0xef, 0x6c, 0x00),
        recommend_neutral: Color32::from_rgb(40, 40, 40),
    },
    symbol_input_width: 160.0,
    poll_interval_ms: 50,
    window_width: 680.0,
    window_height: 620.0,
};

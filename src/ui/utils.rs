use eframe::egui::{Context, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;

    ctx.set_visuals(visuals);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Price as the service sent it, with a dollar sign: 65000 -> "$65000".
/// No rounding; the service already rounds.
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

/// 1.56 -> "1.56%"
pub fn format_percent(pct: f64) -> String {
    format!("{}%", pct)
}

/// Compact price for chart axes and tooltips.
/// - Large (>1000): 2 decimals
/// - Medium (1-1000): 4 decimals
/// - Small (<1): 8 decimals
pub fn format_axis_price(price: f64) -> String {
    let abs_price = price.abs();
    if abs_price >= 1000.0 {
        format!("{:.2}", price)
    } else if abs_price >= 1.0 {
        format!("{:.4}", price)
    } else {
        format!("{:.8}", price)
    }
}

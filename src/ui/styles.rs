use eframe::egui::{Color32, RichText, Ui};

use crate::domain::RecommendationKind;
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders a "Label: Value" row; the label is subdued, the value colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a section header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a sub-section header using the configured global color.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(format!("{}:", label)).strong().color(UI_CONFIG.colors.label));
            ui.label(RichText::new(value).color(color));
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).strong());
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(16.0)
                .color(UI_CONFIG.colors.subsection_heading),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.error));
    }
}

pub fn recommendation_color(kind: RecommendationKind) -> Color32 {
    match kind {
        RecommendationKind::Buy => UI_CONFIG.colors.recommend_buy,
        RecommendationKind::Wait => UI_CONFIG.colors.recommend_wait,
        RecommendationKind::Neutral => UI_CONFIG.colors.recommend_neutral,
    }
}

use eframe::egui::{Button, CentralPanel, Context, Frame, Key, Margin, TextEdit, Ui};

use crate::domain::RecommendationResult;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{UiStyleExt, recommendation_color};
use crate::ui::utils::{format_percent, format_price, spaced_separator};

use super::app::EmaInsightApp;

impl EmaInsightApp {
    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(20));

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.label_header(UI_TEXT.app_heading);
                ui.add_space(10.0);

                self.render_symbol_input(ui);

                if !self.state.error().is_empty() {
                    ui.add_space(8.0);
                    ui.label_error(self.state.error());
                }

                if let Some(result) = self.state.result() {
                    spaced_separator(ui);
                    render_result_panel(ui, result);
                }

                spaced_separator(ui);
                ui.label_subheader(UI_TEXT.chart_heading);
                ui.add_space(6.0);
                self.chart.show(ui);
            });
    }

    fn render_symbol_input(&mut self, ui: &mut Ui) {
        let mut submit = false;

        ui.horizontal(|ui| {
            let response = ui.add(
                TextEdit::singleline(&mut self.state.symbol)
                    .hint_text(UI_TEXT.symbol_hint)
                    .desired_width(UI_CONFIG.symbol_input_width),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                submit = true;
            }

            if ui
                .add(Button::new(UI_TEXT.check_button))
                .on_hover_text(UI_TEXT.check_button_tooltip)
                .clicked()
            {
                submit = true;
            }
        });

        if submit {
            self.request_check();
        }
    }
}

fn render_result_panel(ui: &mut Ui, result: &RecommendationResult) {
    let value_color = UI_CONFIG.colors.heading;

    ui.metric(UI_TEXT.label_symbol, &result.symbol, value_color);
    ui.metric(
        UI_TEXT.label_current_price,
        &format_price(result.current_price),
        value_color,
    );
    ui.metric(UI_TEXT.label_ema55, &format_price(result.ema55), value_color);
    ui.metric(
        UI_TEXT.label_difference,
        &format_percent(result.percent_difference),
        value_color,
    );
    ui.metric(
        UI_TEXT.label_recommendation,
        &result.recommendation,
        recommendation_color(result.kind()),
    );
}

use std::time::Duration;

use eframe::{Frame, egui};

use crate::engine::{InsightEngine, InsightState};
use crate::ui::chart_lifecycle::ChartLifecycle;
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub struct EmaInsightApp {
    pub(super) state: InsightState,
    pub(super) engine: InsightEngine,
    pub(super) chart: ChartLifecycle,
}

impl EmaInsightApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, engine: InsightEngine) -> Self {
        log::info!("EMA Insight ready, using {}", engine.source_signature());
        Self {
            state: InsightState::default(),
            engine,
            chart: ChartLifecycle::default(),
        }
    }

    /// Button click or Enter in the symbol field
    pub(super) fn request_check(&mut self) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Check requested for {:?}", self.state.symbol);
        }
        self.engine.check(&mut self.state);
    }
}

impl eframe::App for EmaInsightApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.chart.teardown();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!(
                "Application shutdown complete ({} checks still in flight).",
                self.engine.in_flight()
            );
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Apply whatever the network has delivered since last frame
        if self.engine.update(&mut self.state) {
            ctx.request_repaint_after(Duration::from_millis(UI_CONFIG.poll_interval_ms));
        }

        self.chart.sync(&self.state);

        self.render_central_panel(ctx);
    }
}

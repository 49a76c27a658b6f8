use eframe::egui::{self, Sense};

use crate::engine::InsightState;
use crate::models::ChartSeries;
use crate::ui::ui_plot_view::{ChartSurface, PriceChart};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Owns the (at most one) chart on the surface and rebuilds it whenever a new
/// history arrives. The old chart is always dropped before the new one exists.
#[derive(Debug, Default)]
pub struct ChartLifecycle {
    surface: ChartSurface,
    chart: Option<PriceChart>,
    synced_revision: u64,
}

impl ChartLifecycle {
    /// Cheap when nothing changed: compares history revisions only.
    pub fn sync(&mut self, state: &InsightState) {
        let revision = state.history_revision();
        if revision == self.synced_revision {
            return;
        }
        self.synced_revision = revision;

        self.teardown();

        let history = state.history();
        if history.is_empty() {
            return;
        }

        match ChartSeries::from_history(history) {
            Ok(series) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_chart_lifecycle {
                    log::info!(
                        "Building chart #{} with {} candles",
                        revision,
                        series.candles.len()
                    );
                }
                self.chart = Some(PriceChart::attach(&self.surface, series, revision));
            }
            Err(e) => {
                log::warn!("Chart not built for history #{}: {}", revision, e);
            }
        }
    }

    /// Drop the current chart, if any. Also used on exit.
    pub fn teardown(&mut self) {
        if let Some(chart) = self.chart.take() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_chart_lifecycle {
                log::info!("Removing chart ({} candles)", chart.series().candles.len());
            }
            drop(chart);
        }
    }

    pub fn chart(&self) -> Option<&PriceChart> {
        self.chart.as_ref()
    }

    pub fn surface(&self) -> &ChartSurface {
        &self.surface
    }

    /// Draws the chart, or reserves the same space when there is none.
    pub fn show(&self, ui: &mut egui::Ui) {
        match &self.chart {
            Some(chart) => chart.show(ui),
            None => {
                ui.allocate_exact_size(self.surface.size(), Sense::hover());
            }
        }
    }
}

#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use data::{ApiError, HttpInsightSource, InsightSource};
pub use domain::{HistoryPoint, RecommendationResult};
pub use engine::{InsightEngine, InsightState};
pub use models::{CandlePoint, ChartSeries, EmaPoint};
pub use ui::EmaInsightApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

use crate::config::API;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the EMA service
    #[arg(long, default_value = API.base_url)]
    pub api_url: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, engine: InsightEngine) -> Box<dyn eframe::App> {
    let app = ui::EmaInsightApp::new(cc, engine);
    Box::new(app)
}

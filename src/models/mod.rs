// Chart-facing views of the fetched history.
// Pure data transforms, independent of UI/visualization

pub mod chart_series;

// Re-export key types for convenience
pub use chart_series::{CandlePoint, ChartError, ChartSeries, EmaPoint, candle_series, ema_series};

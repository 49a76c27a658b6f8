use thiserror::Error;

use crate::domain::{CandleType, HistoryPoint};
use crate::utils::time_utils::{epoch_ms_to_sec, parse_datetime_utc};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("History bar {index} has an unreadable datetime: {value:?}")]
    InvalidDatetime { index: usize, value: String },
}

/// One candle as the chart consumes it. `time` is whole Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandlePoint {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandlePoint {
    pub fn get_type(&self) -> CandleType {
        CandleType::from_open_close(self.open, self.close)
    }

    pub fn body_range(&self) -> (f64, f64) {
        (self.open.min(self.close), self.open.max(self.close))
    }
}

/// One EMA55 sample. `value` is `None` where the service had no average yet;
/// the point is still kept so the series lines up with the candles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmaPoint {
    pub time: i64,
    pub value: Option<f64>,
}

fn bar_time(index: usize, point: &HistoryPoint) -> Result<i64, ChartError> {
    parse_datetime_utc(&point.datetime)
        .map(|dt| epoch_ms_to_sec(dt.timestamp_millis()))
        .ok_or_else(|| ChartError::InvalidDatetime {
            index,
            value: point.datetime.clone(),
        })
}

/// One candle per bar, same order.
pub fn candle_series(history: &[HistoryPoint]) -> Result<Vec<CandlePoint>, ChartError> {
    history
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Ok(CandlePoint {
                time: bar_time(i, p)?,
                open: p.open,
                high: p.high,
                low: p.low,
                close: p.close,
            })
        })
        .collect()
}

/// One EMA point per bar, same order.
pub fn ema_series(history: &[HistoryPoint]) -> Result<Vec<EmaPoint>, ChartError> {
    history
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Ok(EmaPoint {
                time: bar_time(i, p)?,
                value: p.ema55,
            })
        })
        .collect()
}

/// Both series plus the extents the plot needs to frame them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub candles: Vec<CandlePoint>,
    pub ema: Vec<EmaPoint>,
}

impl ChartSeries {
    pub fn from_history(history: &[HistoryPoint]) -> Result<Self, ChartError> {
        Ok(Self {
            candles: candle_series(history)?,
            ema: ema_series(history)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Smallest gap between consecutive bars, or `fallback_sec` for a single bar
    pub fn bar_spacing_sec(&self, fallback_sec: i64) -> i64 {
        self.candles
            .windows(2)
            .map(|w| w[1].time - w[0].time)
            .filter(|gap| *gap > 0)
            .min()
            .unwrap_or(fallback_sec)
    }

    pub fn time_range(&self) -> Option<(i64, i64)> {
        Some((self.candles.first()?.time, self.candles.last()?.time))
    }

    /// Lowest low and highest high, EMA values included
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let lows = self.candles.iter().map(|c| c.low);
        let highs = self.candles.iter().map(|c| c.high);
        let emas = self.ema.iter().filter_map(|e| e.value);

        let min = lows.chain(emas.clone()).fold(f64::INFINITY, f64::min);
        let max = highs.chain(emas).fold(f64::NEG_INFINITY, f64::max);

        (min.is_finite() && max.is_finite()).then_some((min, max))
    }
}

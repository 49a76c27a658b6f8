use serde::{Deserialize, Serialize};

// Define the CandleType enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

impl CandleType {
    /// A bar only counts as bullish when it closed strictly above its open;
    /// flat bars are drawn as bearish.
    pub fn from_open_close(open: f64, close: f64) -> Self {
        if close > open {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }
}

/// One sampled interval of the history endpoint, exactly as the service sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Bar open time as text, e.g. "2024-05-01 08:00"
    pub datetime: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Undefined at the start of a series, sent as null
    #[serde(rename = "EMA55", default)]
    pub ema55: Option<f64>,
}

impl HistoryPoint {
    pub fn get_type(&self) -> CandleType {
        CandleType::from_open_close(self.open, self.close)
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        (self.open.min(self.close), self.open.max(self.close))
    }
}

//! Shared fixtures for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::data::{ApiError, InsightSource, RecommendationResponse};
use crate::domain::{HistoryPoint, RecommendationResult};
use crate::utils::TimeUtils;
use crate::utils::time_utils::epoch_sec_to_utc;

pub const FIRST_BAR_EPOCH_SEC: i64 = 1_714_521_600; // 2024-05-01 00:00 UTC
pub const BAR_SPACING_SEC: i64 = TimeUtils::S_IN_4_H;

pub fn hold_result(symbol: &str) -> RecommendationResult {
    RecommendationResult {
        symbol: symbol.to_string(),
        current_price: 65000.0,
        ema55: 64000.0,
        percent_difference: 1.56,
        recommendation: "Hold".to_string(),
        error: None,
    }
}

/// `count` ascending 4h bars; the first has no EMA yet.
pub fn bars(count: usize) -> Vec<HistoryPoint> {
    (0..count)
        .map(|i| {
            let open = 100.0 + i as f64;
            let close = if i % 2 == 0 { open + 0.5 } else { open - 0.5 };
            HistoryPoint {
                datetime: epoch_sec_to_utc(FIRST_BAR_EPOCH_SEC + i as i64 * BAR_SPACING_SEC),
                open,
                high: open + 1.0,
                low: open - 1.0,
                close,
                ema55: (i > 0).then(|| 99.0 + i as f64 * 0.5),
            }
        })
        .collect()
}

/// An error that stands in for a dead connection or a garbled body.
pub fn broken() -> ApiError {
    ApiError::Decode(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
}

#[derive(Clone)]
pub enum Reply<T> {
    Ok(T),
    Broken,
}

impl<T: Clone> Reply<T> {
    fn get(&self) -> Result<T, ApiError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Broken => Err(broken()),
        }
    }
}

/// In-memory `InsightSource` with fixed answers that records every call.
pub struct ScriptedSource {
    pub recommendation: Reply<RecommendationResponse>,
    pub history: Reply<Vec<HistoryPoint>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new(recommendation: Reply<RecommendationResponse>, history: Reply<Vec<HistoryPoint>>) -> Self {
        Self {
            recommendation,
            history,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Recommendation "Hold" for whatever symbol, and `bar_count` bars
    pub fn healthy(symbol: &str, bar_count: usize) -> Self {
        Self::new(
            Reply::Ok(RecommendationResponse::Ready(hold_result(symbol))),
            Reply::Ok(bars(bar_count)),
        )
    }

    /// e.g. ["recommendation:btc-usd", "history:btc-usd"]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl InsightSource for ScriptedSource {
    async fn ema_recommendation(&self, symbol: &str) -> Result<RecommendationResponse, ApiError> {
        self.record(format!("recommendation:{symbol}"));
        self.recommendation.get()
    }

    async fn history(&self, symbol: &str) -> Result<Vec<HistoryPoint>, ApiError> {
        self.record(format!("history:{symbol}"));
        self.history.get()
    }

    fn signature(&self) -> &'static str {
        "scripted"
    }
}

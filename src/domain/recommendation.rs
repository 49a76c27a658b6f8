use serde::{Deserialize, Serialize};

/// The service's verdict on a symbol relative to its 55-period EMA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub symbol: String,
    pub current_price: f64,
    #[serde(rename = "EMA55")]
    pub ema55: f64,
    /// Already expressed in percent, e.g. 1.56 for +1.56%
    pub percent_difference: f64,
    pub recommendation: String,
    /// Only ever set on payloads that are rejected before reaching the UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Coarse reading of the free-text recommendation, used for colouring only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationKind {
    Buy,
    Wait,
    Neutral,
}

impl RecommendationResult {
    pub fn kind(&self) -> RecommendationKind {
        RecommendationKind::from_text(&self.recommendation)
    }
}

impl RecommendationKind {
    // The service answers "Buy - undervalued" or "Consider waiting - overpriced".
    pub fn from_text(text: &str) -> Self {
        let lower = text.trim().to_lowercase();
        if lower.starts_with("buy") {
            RecommendationKind::Buy
        } else if lower.starts_with("consider waiting") || lower.starts_with("sell") {
            RecommendationKind::Wait
        } else {
            RecommendationKind::Neutral
        }
    }
}

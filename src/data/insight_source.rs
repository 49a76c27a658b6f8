//! Access to the remote EMA service.
//!
//! `InsightSource` is the seam the fetch engine talks to; `HttpInsightSource`
//! is the real implementation over `reqwest`. Both endpoints answer with JSON
//! bodies whatever the HTTP status, so bodies are always read and decoded.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::API;
use crate::data::error::ApiError;
use crate::domain::{HistoryPoint, RecommendationResult};

/// What the recommendation endpoint said, once the body decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationResponse {
    Ready(RecommendationResult),
    /// The service carried an `error` field; its text is shown as-is.
    Rejected(String),
}

impl RecommendationResponse {
    pub fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        let mut value: Value = serde_json::from_slice(body)?;
        if let Some(message) = domain_error(&value) {
            return Ok(RecommendationResponse::Rejected(message));
        }
        // Whatever is left in `error` is falsy and carries no meaning.
        if let Some(fields) = value.as_object_mut() {
            fields.remove("error");
        }
        Ok(RecommendationResponse::Ready(serde_json::from_value(value)?))
    }
}

// A present but blank/false/null `error` does not count as a rejection.
fn domain_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait InsightSource: Send + Sync {
    async fn ema_recommendation(&self, symbol: &str) -> Result<RecommendationResponse, ApiError>;

    /// Bars in chronological order, passed through without further checks.
    async fn history(&self, symbol: &str) -> Result<Vec<HistoryPoint>, ApiError>;

    /// A unique identifier for this implementation (for logs).
    fn signature(&self) -> &'static str;
}

/// `InsightSource` backed by the EMA service's REST API.
#[derive(Clone)]
pub struct HttpInsightSource {
    base_url: String,
    client: Client,
}

impl HttpInsightSource {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.pool_max_idle_per_host(API.client.pool_max_idle_per_host);

        Ok(Self::with_client(base_url, builder.build()?))
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_body(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(body.to_vec())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl InsightSource for HttpInsightSource {
    async fn ema_recommendation(&self, symbol: &str) -> Result<RecommendationResponse, ApiError> {
        let url = API.recommendation_url(&self.base_url, symbol);
        let body = self.get_body(&url).await?;
        RecommendationResponse::from_json(&body)
    }

    async fn history(&self, symbol: &str) -> Result<Vec<HistoryPoint>, ApiError> {
        let url = API.history_url(&self.base_url, symbol);
        let body = self.get_body(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn signature(&self) -> &'static str {
        "EMA service REST API"
    }
}

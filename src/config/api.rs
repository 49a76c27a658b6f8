//! Remote EMA service configuration constants and types.

/// Route segments of the stock endpoints, joined as `/{prefix}/{symbol}/{route}`
pub struct StockRoutes {
    pub prefix: &'static str,
    pub ema_recommendation: &'static str,
    pub history: &'static str,
}

/// Default values for the HTTP client
pub struct ClientDefaults {
    /// Idle keep-alive connections kept per host (native only)
    pub pool_max_idle_per_host: usize,
}

/// The Master API Configuration Struct
pub struct ApiConfig {
    /// Base URL of the EMA service, without a trailing slash
    pub base_url: &'static str,
    pub routes: StockRoutes,
    pub client: ClientDefaults,
}

impl ApiConfig {
    /// `{base}/stock/{symbol}/ema-recommendation`
    pub fn recommendation_url(&self, base_url: &str, symbol: &str) -> String {
        self.stock_url(base_url, symbol, self.routes.ema_recommendation)
    }

    /// `{base}/stock/{symbol}/history`
    pub fn history_url(&self, base_url: &str, symbol: &str) -> String {
        self.stock_url(base_url, symbol, self.routes.history)
    }

    // Symbol goes in verbatim; the service owns its interpretation.
    fn stock_url(&self, base_url: &str, symbol: &str, route: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            base_url.trim_end_matches('/'),
            self.routes.prefix,
            symbol,
            route
        )
    }
}

pub const API: ApiConfig = ApiConfig {
    base_url: "http://localhost:5050",
    routes: StockRoutes {
        prefix: "stock",
        ema_recommendation: "ema-recommendation",
        history: "history",
    },
    client: ClientDefaults {
        pool_max_idle_per_host: 4,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_embed_symbol_verbatim() {
        assert_eq!(
            API.recommendation_url(API.base_url, "btc-usd"),
            "http://localhost:5050/stock/btc-usd/ema-recommendation"
        );
        assert_eq!(
            API.history_url("http://example.test:8080/", "AAPL"),
            "http://example.test:8080/stock/AAPL/history"
        );
    }
}

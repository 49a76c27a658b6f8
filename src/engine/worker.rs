use std::sync::Arc;
use std::sync::mpsc::Sender;

use crate::data::{InsightSource, RecommendationResponse};
use crate::utils::app_time::{AppInstant, elapsed_ms, now};

use super::messages::{CheckFailure, FetchEvent};
use super::state::Transition;

/// Start a check in the background. Nothing here touches UI state; results
/// travel back over `tx` and are applied by the engine on the UI thread.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_check(
    runtime: &tokio::runtime::Handle,
    source: Arc<dyn InsightSource>,
    symbol: String,
    tx: Sender<FetchEvent>,
) {
    runtime.spawn(run_check(source, symbol, tx));
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_check(source: Arc<dyn InsightSource>, symbol: String, tx: Sender<FetchEvent>) {
    wasm_bindgen_futures::spawn_local(run_check(source, symbol, tx));
}

/// Recommendation first; history only once the recommendation was usable.
pub async fn run_check(source: Arc<dyn InsightSource>, symbol: String, tx: Sender<FetchEvent>) {
    let start = now();

    let recommendation = match source.ema_recommendation(&symbol).await {
        Ok(RecommendationResponse::Ready(result)) => result,
        Ok(RecommendationResponse::Rejected(message)) => {
            log::info!("[{}] Service rejected the check: {}", symbol, message);
            let failure = CheckFailure::Domain(message);
            emit(&tx, &symbol, start, Transition::RecommendationFailed(failure));
            return;
        }
        Err(e) => {
            log::warn!(
                "[{}] Recommendation fetch via {} failed: {}",
                symbol,
                source.signature(),
                e
            );
            let failure = CheckFailure::Connectivity;
            emit(&tx, &symbol, start, Transition::RecommendationFailed(failure));
            return;
        }
    };

    emit(
        &tx,
        &symbol,
        start,
        Transition::RecommendationLoaded(recommendation),
    );

    match source.history(&symbol).await {
        Ok(points) => {
            emit(&tx, &symbol, start, Transition::HistoryLoaded(points));
        }
        Err(e) => {
            log::warn!("[{}] History fetch failed: {}", symbol, e);
            let failure = CheckFailure::ChartData;
            emit(&tx, &symbol, start, Transition::HistoryFailed(failure));
        }
    }
}

fn emit(tx: &Sender<FetchEvent>, symbol: &str, start: AppInstant, transition: Transition) {
    let event = FetchEvent {
        symbol: symbol.to_string(),
        duration_ms: elapsed_ms(start),
        transition,
    };
    // If the receiver is gone the window closed; the result has nowhere to go.
    let _ = tx.send(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Reply, ScriptedSource, bars, hold_result};
    use std::sync::mpsc::channel;

    async fn run(source: Arc<ScriptedSource>, symbol: &str) -> Vec<Transition> {
        let (tx, rx) = channel();
        run_check(source, symbol.to_string(), tx).await;
        rx.try_iter().map(|event| event.transition).collect()
    }

    #[tokio::test]
    async fn success_fetches_history_for_same_symbol() {
        let source = Arc::new(ScriptedSource::healthy("btc-usd", 42));

        let transitions = run(source.clone(), "btc-usd").await;

        assert_eq!(
            transitions,
            vec![
                Transition::RecommendationLoaded(hold_result("btc-usd")),
                Transition::HistoryLoaded(bars(42)),
            ]
        );
        assert_eq!(source.calls(), vec!["recommendation:btc-usd", "history:btc-usd"]);
    }

    #[tokio::test]
    async fn domain_error_skips_history() {
        let source = Arc::new(ScriptedSource::new(
            Reply::Ok(RecommendationResponse::Rejected("No data available".into())),
            Reply::Ok(bars(3)),
        ));

        let transitions = run(source.clone(), "zzz").await;

        assert_eq!(
            transitions,
            vec![Transition::RecommendationFailed(CheckFailure::Domain(
                "No data available".into()
            ))]
        );
        assert_eq!(source.calls(), vec!["recommendation:zzz"]);
    }

    #[tokio::test]
    async fn transport_failure_skips_history() {
        let source = Arc::new(ScriptedSource::new(Reply::Broken, Reply::Ok(bars(3))));

        let transitions = run(source.clone(), "btc-usd").await;

        assert_eq!(
            transitions,
            vec![Transition::RecommendationFailed(CheckFailure::Connectivity)]
        );
        assert_eq!(source.calls(), vec!["recommendation:btc-usd"]);
    }

    #[tokio::test]
    async fn history_failure_follows_loaded_recommendation() {
        let source = Arc::new(ScriptedSource::new(
            Reply::Ok(RecommendationResponse::Ready(hold_result("btc-usd"))),
            Reply::Broken,
        ));

        let transitions = run(source, "btc-usd").await;

        assert_eq!(
            transitions,
            vec![
                Transition::RecommendationLoaded(hold_result("btc-usd")),
                Transition::HistoryFailed(CheckFailure::ChartData),
            ]
        );
    }

    #[tokio::test]
    async fn events_carry_the_symbol() {
        let source = Arc::new(ScriptedSource::healthy("eth-usd", 1));
        let (tx, rx) = channel();

        run_check(source, "eth-usd".to_string(), tx).await;

        let symbols: Vec<String> = rx.try_iter().map(|event| event.symbol).collect();
        assert_eq!(symbols, vec!["eth-usd", "eth-usd"]);
    }
}

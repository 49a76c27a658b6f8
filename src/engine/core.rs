use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::data::InsightSource;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

use super::messages::FetchEvent;
use super::state::{InsightState, Transition};
use super::worker;

/// Runs checks against an `InsightSource` and feeds their results into an
/// `InsightState`. Checks are not deduplicated or cancelled: a second check
/// may overlap the first, and whichever response arrives last wins.
pub struct InsightEngine {
    source: Arc<dyn InsightSource>,

    /// Worker Communication
    event_tx: Sender<FetchEvent>,
    event_rx: Receiver<FetchEvent>,

    /// Checks started but not yet finished
    in_flight: usize,

    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Handle,
}

impl InsightEngine {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(source: Arc<dyn InsightSource>, runtime: tokio::runtime::Handle) -> Self {
        let (event_tx, event_rx) = channel::<FetchEvent>();
        Self {
            source,
            event_tx,
            event_rx,
            in_flight: 0,
            runtime,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(source: Arc<dyn InsightSource>) -> Self {
        let (event_tx, event_rx) = channel::<FetchEvent>();
        Self {
            source,
            event_tx,
            event_rx,
            in_flight: 0,
        }
    }

    /// The user asked for a check. Returns false (and leaves `state` alone)
    /// when there is no symbol to check.
    pub fn check(&mut self, state: &mut InsightState) -> bool {
        if state.symbol.is_empty() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Check ignored: empty symbol");
            }
            return false;
        }

        state.apply(Transition::CheckStarted);

        let symbol = state.symbol.clone();
        log::info!("Checking {} via {}", symbol, self.source.signature());

        #[cfg(not(target_arch = "wasm32"))]
        worker::spawn_check(
            &self.runtime,
            Arc::clone(&self.source),
            symbol,
            self.event_tx.clone(),
        );
        #[cfg(target_arch = "wasm32")]
        worker::spawn_check(Arc::clone(&self.source), symbol, self.event_tx.clone());

        self.in_flight += 1;
        true
    }

    /// Apply every event that has arrived, in arrival order.
    /// Returns TRUE while checks are still running (the UI should keep repainting).
    pub fn update(&mut self, state: &mut InsightState) -> bool {
        while let Ok(event) = self.event_rx.try_recv() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_fetch_events {
                log::info!(
                    "[{}] {} after {}ms",
                    event.symbol,
                    describe(&event.transition),
                    event.duration_ms
                );
            }

            if event.transition.ends_check() {
                self.in_flight = self.in_flight.saturating_sub(1);
            }
            state.apply(event.transition);
        }

        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn source_signature(&self) -> &'static str {
        self.source.signature()
    }
}

#[cfg(debug_assertions)]
fn describe(transition: &Transition) -> String {
    match transition {
        Transition::CheckStarted => "check started".to_string(),
        Transition::RecommendationLoaded(result) => {
            format!("recommendation loaded ({})", result.recommendation)
        }
        Transition::RecommendationFailed(failure) => format!("recommendation failed: {}", failure),
        Transition::HistoryLoaded(points) => format!("history loaded ({} bars)", points.len()),
        Transition::HistoryFailed(failure) => format!("history failed: {}", failure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Reply, ScriptedSource, bars};
    use std::time::Duration;

    fn engine_with(source: Arc<ScriptedSource>) -> InsightEngine {
        InsightEngine::new(source, tokio::runtime::Handle::current())
    }

    async fn settle(engine: &mut InsightEngine, state: &mut InsightState) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while engine.update(state) {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await
        .expect("checks did not finish");
    }

    #[tokio::test]
    async fn empty_symbol_is_a_no_op() {
        let source = Arc::new(ScriptedSource::healthy("btc-usd", 3));
        let mut engine = engine_with(source.clone());
        let mut state = InsightState::default();
        let before = state.clone();

        assert!(!engine.check(&mut state));
        tokio::time::sleep(Duration::from_millis(5)).await;

        assert!(!engine.update(&mut state));
        assert_eq!(state, before);
        assert!(source.calls().is_empty());
        assert_eq!(engine.in_flight(), 0);
    }

    #[tokio::test]
    async fn full_check_fills_result_and_history() {
        let source = Arc::new(ScriptedSource::healthy("btc-usd", 42));
        let mut engine = engine_with(source.clone());
        let mut state = InsightState::with_symbol("btc-usd");

        assert!(engine.check(&mut state));
        assert_eq!(engine.in_flight(), 1);
        settle(&mut engine, &mut state).await;

        let result = state.result().expect("result panel should be filled");
        assert_eq!(result.recommendation, "Hold");
        assert_eq!(result.current_price, 65000.0);
        assert_eq!(result.ema55, 64000.0);
        assert_eq!(result.percent_difference, 1.56);
        assert_eq!(state.history().len(), 42);
        assert_eq!(state.history_revision(), 1);
        assert_eq!(state.error(), "");
        assert_eq!(source.calls(), vec!["recommendation:btc-usd", "history:btc-usd"]);
    }

    #[tokio::test]
    async fn new_check_clears_previous_error_immediately() {
        let source = Arc::new(ScriptedSource::new(Reply::Broken, Reply::Ok(bars(1))));
        let mut engine = engine_with(source);
        let mut state = InsightState::with_symbol("btc-usd");

        engine.check(&mut state);
        settle(&mut engine, &mut state).await;
        assert_eq!(state.error(), "Error connecting to server");
        assert_eq!(state.result(), None);

        engine.check(&mut state);
        assert_eq!(state.error(), "");
        settle(&mut engine, &mut state).await;
        assert_eq!(state.error(), "Error connecting to server");
    }

    #[tokio::test]
    async fn overlapping_checks_all_resolve() {
        let source = Arc::new(ScriptedSource::healthy("btc-usd", 4));
        let mut engine = engine_with(source.clone());
        let mut state = InsightState::with_symbol("btc-usd");

        assert!(engine.check(&mut state));
        state.symbol = "eth-usd".to_string();
        assert!(engine.check(&mut state));
        assert_eq!(engine.in_flight(), 2);

        settle(&mut engine, &mut state).await;

        assert_eq!(engine.in_flight(), 0);
        assert_eq!(state.history_revision(), 2);
        assert_eq!(source.calls().len(), 4);
    }
}

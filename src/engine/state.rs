use crate::domain::{HistoryPoint, RecommendationResult};

use super::messages::CheckFailure;

/// Everything the window shows. Only `symbol` is written directly (by the
/// text field); everything else changes through [`InsightState::apply`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightState {
    /// Raw text of the symbol field, used verbatim
    pub symbol: String,
    result: Option<RecommendationResult>,
    error: String,
    history: Vec<HistoryPoint>,
    /// Bumped on every history replacement, even with identical contents.
    /// The chart lifecycle keys off this, not off the data.
    history_revision: u64,
}

/// The well-defined ways a check moves the state along.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    CheckStarted,
    RecommendationLoaded(RecommendationResult),
    RecommendationFailed(CheckFailure),
    HistoryLoaded(Vec<HistoryPoint>),
    HistoryFailed(CheckFailure),
}

impl Transition {
    /// True for the last event a single check can produce
    pub fn ends_check(&self) -> bool {
        matches!(
            self,
            Transition::RecommendationFailed(_)
                | Transition::HistoryLoaded(_)
                | Transition::HistoryFailed(_)
        )
    }
}

impl InsightState {
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn result(&self) -> Option<&RecommendationResult> {
        self.result.as_ref()
    }

    /// Empty when there is nothing to show
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn history(&self) -> &[HistoryPoint] {
        &self.history
    }

    pub fn history_revision(&self) -> u64 {
        self.history_revision
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::CheckStarted => {
                self.result = None;
                self.error.clear();
            }
            Transition::RecommendationLoaded(result) => {
                self.result = Some(result);
            }
            Transition::RecommendationFailed(failure) => {
                self.error = failure.to_string();
            }
            Transition::HistoryLoaded(points) => {
                self.history = points;
                self.history_revision += 1;
            }
            // The recommendation already on screen stays, as does the old history.
            Transition::HistoryFailed(failure) => {
                self.error = failure.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bars, hold_result};

    #[test]
    fn check_started_clears_result_and_error_only() {
        let mut state = InsightState::with_symbol("btc-usd");
        state.apply(Transition::RecommendationLoaded(hold_result("btc-usd")));
        state.apply(Transition::HistoryLoaded(bars(3)));
        state.apply(Transition::HistoryFailed(CheckFailure::ChartData));

        state.apply(Transition::CheckStarted);

        assert_eq!(state.result(), None);
        assert_eq!(state.error(), "");
        assert_eq!(state.history().len(), 3);
        assert_eq!(state.history_revision(), 1);
        assert_eq!(state.symbol, "btc-usd");
    }

    #[test]
    fn failures_show_their_message() {
        let mut state = InsightState::default();

        state.apply(Transition::RecommendationFailed(CheckFailure::Connectivity));
        assert_eq!(state.error(), "Error connecting to server");

        state.apply(Transition::RecommendationFailed(CheckFailure::Domain(
            "No data available".into(),
        )));
        assert_eq!(state.error(), "No data available");
        assert_eq!(state.result(), None);
    }

    #[test]
    fn history_failure_keeps_result_and_history() {
        let mut state = InsightState::default();
        state.apply(Transition::HistoryLoaded(bars(5)));
        state.apply(Transition::CheckStarted);
        state.apply(Transition::RecommendationLoaded(hold_result("btc-usd")));

        state.apply(Transition::HistoryFailed(CheckFailure::ChartData));

        assert_eq!(state.error(), "Error fetching chart data");
        assert_eq!(state.result().map(|r| r.recommendation.as_str()), Some("Hold"));
        assert_eq!(state.history(), bars(5).as_slice());
        assert_eq!(state.history_revision(), 1);
    }

    #[test]
    fn identical_history_still_bumps_revision() {
        let mut state = InsightState::default();
        state.apply(Transition::HistoryLoaded(bars(2)));
        state.apply(Transition::HistoryLoaded(bars(2)));
        assert_eq!(state.history_revision(), 2);

        state.apply(Transition::HistoryLoaded(Vec::new()));
        assert!(state.history().is_empty());
        assert_eq!(state.history_revision(), 3);
    }

    #[test]
    fn only_final_steps_end_a_check() {
        assert!(!Transition::CheckStarted.ends_check());
        assert!(!Transition::RecommendationLoaded(hold_result("x")).ends_check());
        assert!(Transition::RecommendationFailed(CheckFailure::Connectivity).ends_check());
        assert!(Transition::HistoryLoaded(Vec::new()).ends_check());
        assert!(Transition::HistoryFailed(CheckFailure::ChartData).ends_check());
    }
}

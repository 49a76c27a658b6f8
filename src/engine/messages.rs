use thiserror::Error;

use super::state::Transition;

/// Why a check stopped short. `Display` is the exact text shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    /// Recommendation request never produced a readable body
    #[error("Error connecting to server")]
    Connectivity,

    /// The service answered with an `error` field
    #[error("{0}")]
    Domain(String),

    /// History request failed after a good recommendation
    #[error("Error fetching chart data")]
    ChartData,
}

/// The result of one orchestration step, sent back from the fetch task
#[derive(Debug, Clone)]
pub struct FetchEvent {
    pub symbol: String,
    /// Time since the check started
    pub duration_ms: u128,
    pub transition: Transition,
}

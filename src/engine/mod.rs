pub mod core;
pub mod messages;
pub mod state;
pub mod worker;

// Re-export key components
pub use core::InsightEngine;
pub use messages::{CheckFailure, FetchEvent};
pub use state::{InsightState, Transition};

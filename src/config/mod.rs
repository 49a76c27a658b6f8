//! Configuration module for the EMA insight application.

pub mod api;
pub mod chart;

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use api::API;
pub use chart::CHART_CONFIG;

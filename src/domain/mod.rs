// Domain types and value objects
pub mod candle;
pub mod recommendation;

// Re-export commonly used types
pub use candle::{CandleType, HistoryPoint};
pub use recommendation::{RecommendationKind, RecommendationResult};

// Remote data access
pub mod error;
pub mod insight_source;

// Re-export commonly used types
pub use error::ApiError;
pub use insight_source::{HttpInsightSource, InsightSource, RecommendationResponse};

/// Document classification requests.
pub mod classify;
/// Shared HTTP client and endpoint defaults.
pub mod client;
/// Error type for remote service calls.
pub mod error;
/// Publication search requests.
pub mod search;
/// Wire types for both services.
pub mod types;

pub use client::{ApiClient, DEFAULT_CLASSIFY_URL, DEFAULT_SEARCH_URL};
pub use error::ApiError;
pub use types::{
    Category, ClassificationRequest, ClassificationResponse, ConfidenceScores, Publication,
    SearchMetadata, SearchResponse,
};

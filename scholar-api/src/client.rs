use std::time::Duration;

use crate::error::ApiError;

/// Default publication search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://api.irapi.workers.dev/api/publications/search";
/// Default document classification endpoint.
pub const DEFAULT_CLASSIFY_URL: &str = "https://ir-doc-classification.irapi.workers.dev/classify";

/// Shared HTTP client for both remote services.
///
/// Cheap to clone; the underlying connection pool is reference-counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) search_url: String,
    pub(crate) classify_url: String,
}

impl ApiClient {
    /// Build a client for the given endpoints with a per-request timeout.
    pub fn new(
        search_url: impl Into<String>,
        classify_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("scholar/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            http,
            search_url: search_url.into(),
            classify_url: classify_url.into(),
        })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    pub fn classify_url(&self) -> &str {
        &self.classify_url
    }
}

/// Map a non-success status into [`ApiError::Status`].
pub(crate) fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

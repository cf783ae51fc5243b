use tracing::{debug, instrument};

use crate::client::{ApiClient, ensure_success};
use crate::error::ApiError;
use crate::types::SearchResponse;

impl ApiClient {
    /// Fetch one page of publications for `query` starting at `offset`.
    ///
    /// The query is trimmed; a blank query fails without sending a request.
    #[instrument(skip(self), fields(url = %self.search_url))]
    pub async fn search_publications(
        &self,
        query: &str,
        offset: usize,
    ) -> Result<SearchResponse, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApiError::EmptyQuery);
        }

        let response = self
            .http
            .get(&self.search_url)
            .query(&[("q", query)])
            .query(&[("offset", offset)])
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let body: SearchResponse = ensure_success(response)?
            .json()
            .await
            .map_err(ApiError::Decode)?;

        debug!(
            total = body.total,
            limit = body.limit,
            returned = body.publications.len(),
            "search page received"
        );

        Ok(body)
    }
}

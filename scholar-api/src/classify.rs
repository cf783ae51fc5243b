use tracing::{debug, instrument};

use crate::client::{ApiClient, ensure_success};
use crate::error::ApiError;
use crate::types::{ClassificationRequest, ClassificationResponse};

impl ApiClient {
    /// Classify a document as Politics, Business, or Health.
    ///
    /// The document is trimmed; a blank document fails without sending a request.
    #[instrument(skip_all, fields(url = %self.classify_url, chars = document.len()))]
    pub async fn classify_document(
        &self,
        document: &str,
    ) -> Result<ClassificationResponse, ApiError> {
        let document = document.trim();
        if document.is_empty() {
            return Err(ApiError::EmptyDocument);
        }

        let request = ClassificationRequest {
            document: document.to_owned(),
        };

        let response = self
            .http
            .post(&self.classify_url)
            .json(&request)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let body: ClassificationResponse = ensure_success(response)?
            .json()
            .await
            .map_err(ApiError::Decode)?;

        debug!(category = %body.predicted_category, "document classified");

        Ok(body)
    }
}

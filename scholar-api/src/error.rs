use thiserror::Error;

/// Failures talking to the search or classification services.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please enter a search query")]
    EmptyQuery,
    #[error("Please enter a document to classify")]
    EmptyDocument,
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Whether the error was raised before any request was sent.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ApiError::EmptyQuery | ApiError::EmptyDocument)
    }
}

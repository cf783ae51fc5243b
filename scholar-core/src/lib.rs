use std::sync::Arc;
use std::time::Duration;

use scholar_api::{ApiClient, ClassificationResponse, SearchResponse};
use scholar_store::{HistoryStore, RequestSlot};

/// Layered TOML + environment configuration.
pub mod config;
/// Tracing subscriber setup.
pub mod logging;

pub use config::AppConfig;

/// A search response together with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub query: String,
    pub offset: usize,
    pub response: SearchResponse,
}

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub api: Arc<ApiClient>,
    pub history: Arc<HistoryStore>,
    pub search: Arc<RequestSlot<SearchOutcome>>,
    pub classification: Arc<RequestSlot<ClassificationResponse>>,
    pub config: Arc<AppConfig>,
}

impl Context {
    /// Create a new application context.
    pub fn new(api: ApiClient, history: HistoryStore, config: AppConfig) -> Self {
        Self {
            api: Arc::new(api),
            history: Arc::new(history),
            search: Arc::new(RequestSlot::new("search")),
            classification: Arc::new(RequestSlot::new("classification")),
            config: Arc::new(config),
        }
    }

    /// Build the API client and load the history store described by `config`.
    pub async fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let api = ApiClient::new(
            config.api.search_url.clone(),
            config.api.classify_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )?;
        let history = HistoryStore::load(config.history.path.clone(), config.history.capacity).await;

        Ok(Self::new(api, history, config))
    }

    /// Page size to assume before any response has reported one.
    pub fn default_limit(&self) -> usize {
        self.config.pagination.default_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn context_wires_config_into_client_and_history() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut config = AppConfig::default();
        config.api.search_url = "http://127.0.0.1:1/search".to_owned();
        config.history.path = dir.path().join("history.json");
        config.history.capacity = 3;

        let ctx = Context::from_config(config).await?;
        assert_eq!(ctx.api.search_url(), "http://127.0.0.1:1/search");
        assert_eq!(ctx.history.path(), dir.path().join("history.json"));
        assert_eq!(ctx.default_limit(), 20);
        assert!(ctx.search.value().await.is_none());
        Ok(())
    }
}

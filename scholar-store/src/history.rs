use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Number of recent searches kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("cannot write search history to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode search history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Most-recent-first list of distinct queries with a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
    capacity: usize,
}

impl SearchHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Rebuild a history from stored entries, keeping the first occurrence of
    /// each query and dropping anything past capacity.
    pub fn from_entries(entries: impl IntoIterator<Item = String>, capacity: usize) -> Self {
        let mut history = Self::new(capacity);
        for entry in entries {
            let entry = entry.trim();
            if entry.is_empty() || history.entries.iter().any(|existing| existing == entry) {
                continue;
            }
            if history.entries.len() == history.capacity {
                break;
            }
            history.entries.push(entry.to_owned());
        }
        history
    }

    /// Move `query` to the front, inserting it if new and evicting the oldest
    /// entry when over capacity.
    ///
    /// Returns `false` for blank queries, which are never recorded.
    pub fn record(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        self.entries.retain(|existing| existing != query);
        self.entries.insert(0, query.to_owned());
        self.entries.truncate(self.capacity);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entry at a zero-based index, most recent first.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Search history persisted as a JSON array of strings.
///
/// Every mutation is written back to disk before it returns.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    history: RwLock<SearchHistory>,
}

impl HistoryStore {
    /// Load history from `path`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file is logged
    /// and also starts empty; it is overwritten on the next mutation.
    pub async fn load(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let history = match read_entries(&path).await {
            Some(entries) => SearchHistory::from_entries(entries, capacity),
            None => SearchHistory::new(capacity),
        };

        debug!(path = %path.display(), entries = history.len(), "search history loaded");

        Self {
            path,
            history: RwLock::new(history),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current entries, most recent first.
    pub async fn entries(&self) -> Vec<String> {
        self.history.read().await.entries().to_vec()
    }

    pub async fn get(&self, index: usize) -> Option<String> {
        self.history.read().await.get(index).map(ToOwned::to_owned)
    }

    /// Record a submitted query and persist the result.
    pub async fn record(&self, query: &str) -> Result<(), HistoryError> {
        let mut history = self.history.write().await;
        if !history.record(query) {
            return Ok(());
        }
        self.persist(&history).await
    }

    /// Remove every entry and persist the empty list.
    pub async fn clear(&self) -> Result<(), HistoryError> {
        let mut history = self.history.write().await;
        history.clear();
        self.persist(&history).await
    }

    async fn persist(&self, history: &SearchHistory) -> Result<(), HistoryError> {
        let encoded = serde_json::to_vec_pretty(history.entries())?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| HistoryError::Io {
                    path: self.path.clone(),
                    source,
                })?;
        }

        tokio::fs::write(&self.path, encoded)
            .await
            .map_err(|source| HistoryError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

async fn read_entries(path: &Path) -> Option<Vec<String>> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read search history; starting empty");
            return None;
        }
    };

    match serde_json::from_slice::<Vec<String>>(&raw) {
        Ok(entries) => Some(entries),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt search history; starting empty");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_moves_existing_query_to_front() {
        let mut history = SearchHistory::new(10);
        history.record("alpha");
        history.record("beta");
        history.record("alpha");
        assert_eq!(history.entries(), ["alpha", "beta"]);
    }

    #[test]
    fn record_evicts_oldest_past_capacity() {
        let mut history = SearchHistory::new(DEFAULT_HISTORY_CAPACITY);
        for n in 0..15 {
            history.record(&format!("query {n}"));
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.get(0), Some("query 14"));
        assert_eq!(history.get(9), Some("query 5"));
    }

    #[test]
    fn blank_queries_are_ignored_and_others_trimmed() {
        let mut history = SearchHistory::new(3);
        assert!(!history.record("   "));
        assert!(history.record("  growth  "));
        assert_eq!(history.entries(), ["growth"]);
    }

    #[test]
    fn from_entries_dedupes_and_caps() {
        let stored = ["a", "b", "a", "", "c", "d"].map(String::from);
        let history = SearchHistory::from_entries(stored, 3);
        assert_eq!(history.entries(), ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn store_round_trips_through_disk() -> Result<(), HistoryError> {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("history.json");

        let store = HistoryStore::load(&path, 10).await;
        assert!(store.entries().await.is_empty());
        store.record("labour markets").await?;
        store.record("trade").await?;

        let reloaded = HistoryStore::load(&path, 10).await;
        assert_eq!(reloaded.entries().await, ["trade", "labour markets"]);

        reloaded.clear().await?;
        let cleared = HistoryStore::load(&path, 10).await;
        assert!(cleared.entries().await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_starts_empty_and_is_overwritten() -> Result<(), HistoryError> {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("history.json");
        std::fs::write(&path, b"{not json").expect("seed file");

        let store = HistoryStore::load(&path, 10).await;
        assert!(store.entries().await.is_empty());

        store.record("recovery").await?;
        let raw = std::fs::read_to_string(&path).expect("read back");
        let entries: Vec<String> = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(entries, ["recovery"]);
        Ok(())
    }
}

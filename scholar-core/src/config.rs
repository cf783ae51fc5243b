use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, anyhow};
use serde::Deserialize;

use scholar_api::{DEFAULT_CLASSIFY_URL, DEFAULT_SEARCH_URL};
use scholar_store::DEFAULT_HISTORY_CAPACITY;

/// Config file used when neither `--config` nor `SCHOLAR_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "scholar.toml";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_classify_url")]
    pub classify_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            classify_url: default_classify_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HistoryConfig {
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            capacity: default_history_capacity(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaginationConfig {
    /// Page size assumed before the first response reports its own limit.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_owned()
}
fn default_classify_url() -> String {
    DEFAULT_CLASSIFY_URL.to_owned()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_history_path() -> PathBuf {
    PathBuf::from(".scholar_history.json")
}
fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}
fn default_limit() -> usize {
    20
}

/// Resolve the config path: explicit argument, then `SCHOLAR_CONFIG`, then the default.
pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("SCHOLAR_CONFIG").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Parse a config file. A missing file yields the defaults.
pub fn load_from_file(path: &Path) -> Result<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(e).with_context(|| format!("cannot read {}", path.display())),
    };

    toml::from_str(&content).with_context(|| format!("invalid config file {}", path.display()))
}

impl AppConfig {
    /// Load, apply environment overrides, and validate.
    pub fn load_and_validate(explicit_path: Option<&Path>) -> Result<Self> {
        let path = resolve_path(explicit_path);
        let mut cfg = load_from_file(&path)?;
        cfg.apply_env_overrides(|key| std::env::var(key).ok());
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Override endpoints and history path from `SCHOLAR_*` variables.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("SCHOLAR_SEARCH_URL") {
            self.api.search_url = url;
        }
        if let Some(url) = lookup("SCHOLAR_CLASSIFY_URL") {
            self.api.classify_url = url;
        }
        if let Some(path) = lookup("SCHOLAR_HISTORY_PATH") {
            self.history.path = PathBuf::from(path);
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.api.normalize_and_validate()?;

        if self.history.capacity == 0 {
            return Err(anyhow!("history.capacity must be >= 1"));
        }
        if self.history.path.as_os_str().is_empty() {
            self.history.path = default_history_path();
        }
        if self.pagination.default_limit == 0 {
            return Err(anyhow!("pagination.default_limit must be >= 1"));
        }
        Ok(())
    }
}

impl ApiConfig {
    fn normalize_and_validate(&mut self) -> Result<()> {
        if self.search_url.trim().is_empty() {
            self.search_url = default_search_url();
        }
        if self.classify_url.trim().is_empty() {
            self.classify_url = default_classify_url();
        }
        self.search_url = self.search_url.trim().to_owned();
        self.classify_url = self.classify_url.trim().to_owned();

        for (key, url) in [
            ("api.search_url", &self.search_url),
            ("api.classify_url", &self.classify_url),
        ] {
            let lower = url.to_ascii_lowercase();
            if !(lower.starts_with("http://") || lower.starts_with("https://")) {
                return Err(anyhow!("{key} must start with http:// or https:// (got {url})"));
            }
        }

        if self.timeout_secs == 0 {
            return Err(anyhow!("api.timeout_secs must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = load_from_file(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.history.capacity, 10);
        assert_eq!(cfg.pagination.default_limit, 20);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scholar.toml");
        std::fs::write(
            &path,
            "[api]\nsearch_url = \"http://localhost:8787/search\"\n\n[history]\ncapacity = 5\n",
        )
        .expect("write config");

        let cfg = load_from_file(&path).expect("parse");
        assert_eq!(cfg.api.search_url, "http://localhost:8787/search");
        assert_eq!(cfg.api.classify_url, DEFAULT_CLASSIFY_URL);
        assert_eq!(cfg.history.capacity, 5);
        assert_eq!(cfg.api.timeout_secs, 15);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scholar.toml");
        std::fs::write(&path, "[api\nsearch_url = ").expect("write config");
        assert!(load_from_file(&path).is_err());
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let mut cfg = AppConfig::default();
        cfg.apply_env_overrides(|key| match key {
            "SCHOLAR_SEARCH_URL" => Some("http://127.0.0.1:9000/s".to_owned()),
            "SCHOLAR_HISTORY_PATH" => Some("/tmp/h.json".to_owned()),
            _ => None,
        });
        assert_eq!(cfg.api.search_url, "http://127.0.0.1:9000/s");
        assert_eq!(cfg.api.classify_url, DEFAULT_CLASSIFY_URL);
        assert_eq!(cfg.history.path, PathBuf::from("/tmp/h.json"));
    }

    #[test]
    fn validation_restores_blank_urls_and_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        cfg.api.search_url = "  ".to_owned();
        cfg.normalize_and_validate().expect("valid");
        assert_eq!(cfg.api.search_url, DEFAULT_SEARCH_URL);

        let mut bad_scheme = AppConfig::default();
        bad_scheme.api.classify_url = "ftp://example.org".to_owned();
        assert!(bad_scheme.normalize_and_validate().is_err());

        let mut zero_limit = AppConfig::default();
        zero_limit.pagination.default_limit = 0;
        assert!(zero_limit.normalize_and_validate().is_err());

        let mut zero_capacity = AppConfig::default();
        zero_capacity.history.capacity = 0;
        assert!(zero_capacity.normalize_and_validate().is_err());
    }

    #[test]
    fn explicit_path_wins() {
        let path = resolve_path(Some(Path::new("custom.toml")));
        assert_eq!(path, PathBuf::from("custom.toml"));
    }
}

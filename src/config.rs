//! Client configuration injected at startup.
//!
//! The base URL is always supplied explicitly (flag or environment); nothing
//! here looks at the host the program runs on.

use clap::ValueEnum;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Canonical wait budget for one recommendation request.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

pub const DEFAULT_TOP_K: usize = 5;

pub const RECOMMEND_PATH: &str = "recommend";

/// Which settled response is allowed to define the displayed results when
/// several searches overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ResponseOrdering {
    /// Only the response to the most recently issued request is applied.
    #[default]
    #[value(name = "latest")]
    LatestRequest,
    /// Every response is applied as it arrives; the last to arrive wins even
    /// if it answers an older query.
    Arrival,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("top_k must be greater than zero")]
    ZeroTopK,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub top_k: usize,
    pub response_ordering: ResponseOrdering,
    endpoint: Url,
}

impl ClientConfig {
    pub fn new(base_url: &str, timeout_ms: u64, top_k: usize) -> Result<Self, ConfigError> {
        if timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if top_k == 0 {
            return Err(ConfigError::ZeroTopK);
        }

        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let base = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
        }
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }

        let endpoint = recommend_endpoint_for(&base).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            base_url: base,
            timeout: Duration::from_millis(timeout_ms),
            top_k,
            response_ordering: ResponseOrdering::default(),
            endpoint,
        })
    }

    pub fn with_response_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.response_ordering = ordering;
        self
    }

    /// `{base_url}/recommend`, keeping any path prefix of the base URL.
    pub fn recommend_endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_TIMEOUT_MS, DEFAULT_TOP_K)
            .expect("built-in client defaults are valid")
    }
}

fn recommend_endpoint_for(base: &Url) -> Result<Url, url::ParseError> {
    // Url::join replaces the last path segment unless the path ends in '/'.
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(RECOMMEND_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(config.timeout, Duration::from_millis(15_000));
        assert_eq!(config.top_k, 5);
        assert_eq!(config.response_ordering, ResponseOrdering::LatestRequest);
        assert_eq!(
            config.recommend_endpoint().as_str(),
            "http://127.0.0.1:8000/recommend"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let config = ClientConfig::new("https://api.example.edu/finder", 1000, 5).unwrap();
        assert_eq!(
            config.recommend_endpoint().as_str(),
            "https://api.example.edu/finder/recommend"
        );

        let config = ClientConfig::new("https://api.example.edu/finder/", 1000, 5).unwrap();
        assert_eq!(
            config.recommend_endpoint().as_str(),
            "https://api.example.edu/finder/recommend"
        );
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert_eq!(
            ClientConfig::new(DEFAULT_API_URL, 0, 5).unwrap_err(),
            ConfigError::ZeroTimeout
        );
        assert_eq!(
            ClientConfig::new(DEFAULT_API_URL, 100, 0).unwrap_err(),
            ConfigError::ZeroTopK
        );
        assert!(matches!(
            ClientConfig::new("not a url", 100, 5),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://example.edu", 100, 5),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_response_ordering_override() {
        let config = ClientConfig::default().with_response_ordering(ResponseOrdering::Arrival);
        assert_eq!(config.response_ordering, ResponseOrdering::Arrival);
    }
}

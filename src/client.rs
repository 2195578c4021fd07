//! Cached HTTP client
//!
//! Issues GET requests against the catalog and memoizes successful parsed
//! responses by exact request URL. The raw transport sits behind the
//! [`Backend`] trait so tests can swap in a canned backend without a network.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;

use crate::cache::ResponseCache;
use crate::config;
use crate::{log_debug, log_error, log_warn};

const MODULE: &str = "client";

/// Errors surfaced by catalog fetches
#[derive(Debug, Error)]
pub enum FetchError {
    /// The remote answered with a non-success status
    #[error("HTTP {status} {reason}")]
    Http { status: u16, reason: String },

    /// Network-level failure; no usable response was received
    #[error("network error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape
    #[error("unexpected response shape: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// True for an HTTP 404. The by-id lookup is the only caller that
    /// collapses this into an absent result; everywhere else it is an error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Http { status: 404, .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Raw transport seam: one GET, body parsed as JSON.
///
/// The production implementation is [`HttpBackend`]; tests use a canned
/// backend that records requests.
pub trait Backend: Send + Sync {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// reqwest-backed transport
pub struct HttpBackend {
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config::app::USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Backend for HttpBackend {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        log_debug!(MODULE, "GET {}", url);

        let response = self.client.get(url).send().await.map_err(|err| {
            log_error!(MODULE, "Request to {} failed: {}", url, err);
            FetchError::from(err)
        })?;
        let status = response.status();

        if !status.is_success() {
            log_warn!(MODULE, "GET {} answered {}", url, status);
            return Err(FetchError::Http {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Memoizing client: one owned cache in front of one backend.
///
/// Hits return the stored body without touching the network; misses issue a
/// single GET and store the parsed body on success. Failures leave the cache
/// unmodified, so a failed URL is retried in full on the next call. Two
/// concurrent misses for the same URL both reach the backend; the cache
/// takes the last write, which carries the same immutable value.
pub struct CachedClient<B = HttpBackend> {
    backend: B,
    cache: ResponseCache,
}

impl CachedClient<HttpBackend> {
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self::with_backend(HttpBackend::new()?))
    }
}

impl<B: Backend> CachedClient<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            cache: ResponseCache::new(),
        }
    }

    /// Fetch a URL, serving from the cache when possible
    pub async fn get(&self, url: &str) -> Result<Value, FetchError> {
        if let Some(cached) = self.cache.get(url) {
            return Ok(cached);
        }

        let value = self.backend.get_json(url).await?;
        self.cache.insert(url, value.clone());
        Ok(value)
    }

    /// The cache owned by this client
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::mocks::MockBackend;
    use serde_json::json;

    const URL: &str = "https://api.fwcatalog.io/firmware?limit=50&offset=0";

    #[tokio::test]
    async fn test_second_get_serves_from_cache() {
        let backend = MockBackend::new();
        backend.add_response(URL, json!({"page": {"size": 50}}));
        let client = CachedClient::with_backend(backend);

        let first = client.get(URL).await.unwrap();
        let second = client.get(URL).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_distinct_urls_fetch_separately() {
        let backend = MockBackend::new();
        backend.add_response("https://api.fwcatalog.io/a", json!(1));
        backend.add_response("https://api.fwcatalog.io/b", json!(2));
        let client = CachedClient::with_backend(backend);

        client.get("https://api.fwcatalog.io/a").await.unwrap();
        client.get("https://api.fwcatalog.io/b").await.unwrap();
        client.get("https://api.fwcatalog.io/a").await.unwrap();

        assert_eq!(client.backend.call_count(), 2);
        assert_eq!(client.cache().len(), 2);
    }

    #[tokio::test]
    async fn test_http_error_carries_status_and_reason() {
        let backend = MockBackend::new();
        backend.fail_with(URL, 503, "Service Unavailable");
        let client = CachedClient::with_backend(backend);

        let err = client.get(URL).await.unwrap_err();
        match err {
            FetchError::Http { status, reason } => {
                assert_eq!(status, 503);
                assert_eq!(reason, "Service Unavailable");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_leaves_cache_unmodified_and_is_retried() {
        let backend = MockBackend::new();
        backend.fail_with(URL, 500, "Internal Server Error");
        let client = CachedClient::with_backend(backend);

        assert!(client.get(URL).await.is_err());
        assert!(client.cache().is_empty());

        // The remote recovers; the same URL goes back to the network
        client.backend.clear_failures();
        client.backend.add_response(URL, json!({"ok": true}));

        assert_eq!(client.get(URL).await.unwrap(), json!({"ok": true}));
        assert_eq!(client.backend.call_count(), 2);
        assert_eq!(client.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let backend = MockBackend::new();
        backend.fail_transport(URL, "connection reset by peer");
        let client = CachedClient::with_backend(backend);

        let err = client.get(URL).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_is_not_found_only_matches_404() {
        let not_found = FetchError::Http {
            status: 404,
            reason: "Not Found".to_string(),
        };
        let server_error = FetchError::Http {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };

        assert!(not_found.is_not_found());
        assert!(!server_error.is_not_found());
        assert!(!FetchError::Transport("timeout".to_string()).is_not_found());
    }
}

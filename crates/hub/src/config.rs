//! Hub client configuration loaded from environment variables.
//!
//! [`HubConfig`] carries everything a single send needs: the Hub base URL,
//! the optional bearer token, and the timeout/retry tuning. A config value
//! is passed explicitly into every send call; nothing in this crate reads
//! the environment after construction, and nothing caches validity.

use std::time::Duration;

use crate::retry::RetryPolicy;

/// Default per-attempt request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Error marker reported when the Hub base URL is not configured.
pub const NOT_CONFIGURED: &str = "hub not configured";

/// Configuration for the outbound Hub delivery client.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Base URL of the Hub, e.g. `https://hub.example.com`. When `None`,
    /// every send short-circuits to a skipped result without network I/O.
    pub base_url: Option<String>,
    /// Bearer token attached as `Authorization` when set.
    pub token: Option<String>,
    /// Version tag of this system, forwarded in every envelope.
    pub source_version: Option<String>,
    /// Per-attempt HTTP timeout.
    pub request_timeout: Duration,
    /// Retry/backoff tuning.
    pub retry: RetryPolicy,
}

impl HubConfig {
    /// Load configuration from environment variables.
    ///
    /// An unset or empty `HUB_BASE_URL` leaves delivery disabled; every
    /// send then short-circuits without network I/O.
    ///
    /// | Variable               | Default                      |
    /// |------------------------|------------------------------|
    /// | `HUB_BASE_URL`         | — (delivery disabled)        |
    /// | `HUB_TOKEN`            | — (no `Authorization` header)|
    /// | `HUB_SOURCE_VERSION`   | — (omitted from envelopes)   |
    /// | `HUB_TIMEOUT_MS`       | `5000`                       |
    /// | `HUB_MAX_ATTEMPTS`     | `2`                          |
    /// | `HUB_RETRY_BACKOFF_MS` | `300`                        |
    pub fn from_env() -> Self {
        let base_url = std::env::var("HUB_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let request_timeout = Duration::from_millis(env_parse(
            "HUB_TIMEOUT_MS",
            DEFAULT_REQUEST_TIMEOUT.as_millis() as u64,
        ));

        let retry = RetryPolicy {
            max_attempts: env_parse("HUB_MAX_ATTEMPTS", RetryPolicy::DEFAULT_MAX_ATTEMPTS),
            initial_backoff: Duration::from_millis(env_parse(
                "HUB_RETRY_BACKOFF_MS",
                RetryPolicy::DEFAULT_INITIAL_BACKOFF.as_millis() as u64,
            )),
        };

        Self {
            base_url,
            token: std::env::var("HUB_TOKEN").ok(),
            source_version: std::env::var("HUB_SOURCE_VERSION").ok(),
            request_timeout,
            retry,
        }
    }

    /// Fully-qualified event ingestion endpoint, or `None` when the Hub is
    /// not configured.
    pub fn events_url(&self) -> Option<String> {
        let base = self.base_url.as_deref()?.trim_end_matches('/');
        if base.is_empty() {
            return None;
        }
        Some(format!("{base}/api/events"))
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            source_version: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

/// Parse an environment variable, falling back to `default` when the
/// variable is unset or malformed.
fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

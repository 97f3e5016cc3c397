//! HTTP transport for Hub event delivery.
//!
//! [`HttpTransport`] performs one POST of a serialized envelope (or batch)
//! per call, bounded by a per-attempt timeout. Every outcome — success,
//! non-2xx answer, network failure, timeout abort — comes back as a value;
//! nothing escapes to the caller as a panic or an unclassified error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for a single failed delivery attempt.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The Hub answered with a non-2xx status. `body` is best-effort.
    #[error("hub returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The attempt was aborted at the timeout boundary.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Network-level failure (DNS, connect, reset).
    #[error("network error: {0}")]
    Network(String),
}

impl TransportError {
    /// HTTP status observed on this attempt, if the Hub answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// EventTransport
// ---------------------------------------------------------------------------

/// One delivery attempt against the Hub.
///
/// Production code uses [`HttpTransport`]; the test suites substitute
/// scripted implementations to drive the retry controller without a
/// network.
#[async_trait]
pub trait EventTransport: Send + Sync {
    /// POST `body` to `url`, returning the HTTP status on any 2xx answer.
    async fn post_events(
        &self,
        url: &str,
        token: Option<&str>,
        body: &str,
        timeout: Duration,
    ) -> Result<u16, TransportError>;
}

/// Delivers envelopes to the Hub over HTTP.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a shared connection pool.
    ///
    /// The per-attempt timeout is passed into [`post_events`] rather than
    /// baked into the client, so one transport serves differently tuned
    /// configurations.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventTransport for HttpTransport {
    async fn post_events(
        &self,
        url: &str,
        token: Option<&str>,
        body: &str,
        timeout: Duration,
    ) -> Result<u16, TransportError> {
        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .timeout(timeout);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Err(TransportError::Timeout(timeout)),
            Err(e) => return Err(TransportError::Network(e.to_string())),
        };

        let status = response.status();
        if status.is_success() {
            return Ok(status.as_u16());
        }

        let body = response.text().await.unwrap_or_default();
        Err(TransportError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

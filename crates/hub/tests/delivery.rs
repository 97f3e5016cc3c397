//! Integration tests against a local mock Hub.
//!
//! Each test boots an axum server on an ephemeral port, points a
//! [`HubClient`] at it, and inspects both the returned [`DeliveryResult`]
//! and what actually arrived on the wire.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};

use solhem_core::types::{ObservationType, Severity};
use solhem_hub::event::{CareTaskCompleted, ObservationCreated};
use solhem_hub::retry::RetryPolicy;
use solhem_hub::{Envelope, HubClient, HubConfig, SOURCE_TAG};

/// Scripted Hub endpoint: records every request and replays a queue of
/// response statuses (defaulting to 200 once the queue is empty).
#[derive(Default)]
struct MockHub {
    requests: AtomicUsize,
    request_times: Mutex<Vec<Instant>>,
    bodies: Mutex<Vec<serde_json::Value>>,
    auth_headers: Mutex<Vec<Option<String>>>,
    content_types: Mutex<Vec<Option<String>>>,
    responses: Mutex<VecDeque<u16>>,
    /// Delay before answering, to drive the client into its timeout.
    stall: Option<Duration>,
}

impl MockHub {
    fn with_responses(responses: impl IntoIterator<Item = u16>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            ..Default::default()
        }
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn last_body(&self) -> serde_json::Value {
        self.bodies.lock().unwrap().last().cloned().unwrap()
    }
}

async fn ingest(
    State(hub): State<Arc<MockHub>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    hub.requests.fetch_add(1, Ordering::SeqCst);
    hub.request_times.lock().unwrap().push(Instant::now());
    hub.bodies.lock().unwrap().push(body);
    hub.auth_headers.lock().unwrap().push(
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
    );
    hub.content_types.lock().unwrap().push(
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
    );

    let stall = hub.stall;
    if let Some(delay) = stall {
        tokio::time::sleep(delay).await;
    }

    let status = hub.responses.lock().unwrap().pop_front().unwrap_or(200);
    StatusCode::from_u16(status).unwrap()
}

/// Serve the mock Hub on an ephemeral port and return its base URL.
async fn start_hub(hub: Arc<MockHub>) -> String {
    let app = Router::new()
        .route("/api/events", post(ingest))
        .with_state(hub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock hub");
    let addr = listener.local_addr().expect("mock hub addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock hub");
    });

    format!("http://{addr}")
}

fn config_for(base_url: &str) -> HubConfig {
    HubConfig {
        base_url: Some(base_url.to_owned()),
        ..Default::default()
    }
}

/// Same as [`config_for`] but with a short backoff to keep tests fast.
fn fast_config_for(base_url: &str) -> HubConfig {
    HubConfig {
        base_url: Some(base_url.to_owned()),
        retry: RetryPolicy {
            max_attempts: 2,
            initial_backoff: Duration::from_millis(10),
        },
        ..Default::default()
    }
}

fn observation() -> ObservationCreated {
    ObservationCreated {
        observation_id: "obs-1".into(),
        resident_id: "res-1".into(),
        residence_id: "resid-1".into(),
        observation_type: ObservationType::Clinical,
        severity: Severity::Info,
        content: "BP stable".into(),
        created_at: "2024-01-01T10:00:00Z".parse().unwrap(),
        visible_to_family: false,
        metadata: None,
    }
}

#[tokio::test]
async fn delivers_observation_on_first_attempt() {
    let hub = Arc::new(MockHub::default());
    let base_url = start_hub(hub.clone()).await;
    let client = HubClient::new();

    let result = client
        .send_observation_created(&config_for(&base_url), observation())
        .await;

    assert!(result.ok);
    assert_eq!(result.attempts, 1);
    assert_eq!(result.status, Some(200));
    assert_eq!(result.error, None);
    assert_eq!(hub.requests(), 1);

    let body = hub.last_body();
    assert_eq!(body["type"], "observation.created");
    assert_eq!(body["source"], SOURCE_TAG);
    assert_eq!(body["payload"]["observationId"], "obs-1");
    assert_eq!(body["payload"]["observationType"], "CLINICAL");
    assert_eq!(body["payload"]["severity"], "INFO");

    let received_at = body["received_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(received_at).is_ok());

    let content_type = hub.content_types.lock().unwrap().last().cloned().flatten();
    assert_eq!(content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn bearer_token_is_sent_only_when_configured() {
    let hub = Arc::new(MockHub::default());
    let base_url = start_hub(hub.clone()).await;
    let client = HubClient::new();

    let mut config = config_for(&base_url);
    config.token = Some("secret-token".into());
    client.send_observation_created(&config, observation()).await;

    config.token = None;
    client.send_observation_created(&config, observation()).await;

    let auth_headers = hub.auth_headers.lock().unwrap();
    assert_eq!(auth_headers[0].as_deref(), Some("Bearer secret-token"));
    assert_eq!(auth_headers[1], None);
}

#[tokio::test]
async fn retries_after_the_documented_backoff_then_succeeds() {
    let hub = Arc::new(MockHub::with_responses([500]));
    let base_url = start_hub(hub.clone()).await;
    let client = HubClient::new();

    let result = client
        .send_observation_created(&config_for(&base_url), observation())
        .await;

    assert!(result.ok);
    assert_eq!(result.attempts, 2);
    assert_eq!(result.status, Some(200));
    assert_eq!(hub.requests(), 2);

    // No jitter is applied, so the gap between attempts is the plain
    // 300 ms initial backoff (a known thundering-herd limitation).
    let times = hub.request_times.lock().unwrap();
    let gap = times[1].duration_since(times[0]);
    assert!(gap >= Duration::from_millis(300), "gap was {gap:?}");
    assert!(gap < Duration::from_millis(600), "gap was {gap:?}");
}

#[tokio::test]
async fn persistent_500_exhausts_exactly_two_attempts() {
    let hub = Arc::new(MockHub::with_responses([500, 500, 500]));
    let base_url = start_hub(hub.clone()).await;
    let client = HubClient::new();

    let result = client
        .send_observation_created(&fast_config_for(&base_url), observation())
        .await;

    assert!(!result.ok);
    assert_eq!(result.attempts, 2);
    assert_eq!(result.status, Some(500));
    assert!(result.error.as_deref().unwrap().contains("HTTP 500"));
    assert_eq!(hub.requests(), 2);
}

#[tokio::test]
async fn stalled_hub_hits_the_injected_timeout_and_fails() {
    let hub = Arc::new(MockHub {
        stall: Some(Duration::from_secs(5)),
        ..Default::default()
    });
    let base_url = start_hub(hub.clone()).await;
    let client = HubClient::new();

    let mut config = fast_config_for(&base_url);
    config.request_timeout = Duration::from_millis(50);

    let started = Instant::now();
    let result = client
        .send_observation_created(&config, observation())
        .await;

    assert!(!result.ok);
    assert_eq!(result.attempts, 2);
    assert_eq!(result.status, None);
    assert!(result.error.as_deref().unwrap().contains("timed out"));
    // Both attempts abort at the 50 ms boundary instead of hanging.
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(hub.requests(), 2);
}

#[tokio::test]
async fn unconfigured_hub_returns_fast_with_zero_attempts() {
    let client = HubClient::new();

    let started = Instant::now();
    let result = client
        .send_observation_created(&HubConfig::default(), observation())
        .await;

    assert!(!result.ok);
    assert_eq!(result.attempts, 0);
    assert!(result.is_skipped());
    // No network and no backoff sleeps on this path.
    assert!(started.elapsed() < Duration::from_millis(100));
}

#[tokio::test]
async fn dispatch_returns_before_delivery_completes() {
    let hub = Arc::new(MockHub {
        stall: Some(Duration::from_millis(150)),
        ..Default::default()
    });
    let base_url = start_hub(hub.clone()).await;
    let client = HubClient::new();

    let started = Instant::now();
    client.dispatch(&config_for(&base_url), observation());
    assert!(started.elapsed() < Duration::from_millis(100));

    // The detached task still completes the delivery.
    let deadline = Instant::now() + Duration::from_secs(2);
    while hub.requests() == 0 && Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(hub.requests(), 1);
}

#[tokio::test]
async fn batch_of_mixed_kinds_is_posted_as_one_array() {
    let hub = Arc::new(MockHub::with_responses([202]));
    let base_url = start_hub(hub.clone()).await;
    let client = HubClient::new();

    let envelopes = vec![
        Envelope::new(observation(), Some("1.4.2".into())).erased(),
        Envelope::new(
            CareTaskCompleted {
                care_task_id: "task-1".into(),
                resident_id: "res-1".into(),
                completed_by: "user-2".into(),
                notes: Some("Given with breakfast".into()),
                completed_at: "2024-01-01T08:00:00Z".parse().unwrap(),
            },
            Some("1.4.2".into()),
        )
        .erased(),
    ];

    let result = client.send_batch(&config_for(&base_url), envelopes).await;

    assert!(result.ok);
    assert_eq!(result.attempts, 1);
    assert_eq!(result.status, Some(202));
    assert_eq!(hub.requests(), 1);

    let body = hub.last_body();
    let batch = body.as_array().unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0]["type"], "observation.created");
    assert_eq!(batch[1]["type"], "care_task.completed");
    assert_eq!(batch[1]["payload"]["careTaskId"], "task-1");
}

//! The Hub delivery client.
//!
//! [`HubClient`] owns the transport and drives the full send path: the
//! configuration guard, envelope construction, the retry loop, and outcome
//! reporting. The public surface never returns an error and never panics —
//! a Hub outage degrades to logged failure results, nothing more.
//!
//! Callers on a request path should use [`dispatch`](HubClient::dispatch)
//! after their primary database write commits; the delivery then runs as a
//! detached task and cannot delay or fail the HTTP response.

use std::sync::Arc;

use crate::config::HubConfig;
use crate::envelope::Envelope;
use crate::event::{
    CareTaskCompleted, CareTaskCreated, CareTaskStatusChanged, DailyLogCreated, DocumentUploaded,
    HubPayload, IncidentCreated, IncidentResolved, MaintenanceTicketCompleted,
    MaintenanceTicketCreated, MaintenanceTicketStatusChanged, ObservationCreated, ResidentArchived,
    ResidentCreated, ResidentUpdated,
};
use crate::result::{report, report_batch, DeliveryResult};
use crate::transport::{EventTransport, HttpTransport};

/// Client for delivering domain events to the integration Hub.
///
/// Cheap to clone; hold one in application state and call the typed
/// helpers from route handlers.
#[derive(Clone)]
pub struct HubClient {
    transport: Arc<dyn EventTransport>,
}

impl HubClient {
    /// Create a client backed by the real HTTP transport.
    pub fn new() -> Self {
        Self {
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Create a client with a custom transport (used by the test suites).
    pub fn with_transport(transport: Arc<dyn EventTransport>) -> Self {
        Self { transport }
    }

    /// Send one event, driving the retry loop to completion.
    ///
    /// Checks the configuration guard before anything else: with no Hub
    /// base URL configured, this returns a skipped result without building
    /// an envelope or touching the network.
    pub async fn send<P: HubPayload>(&self, config: &HubConfig, payload: P) -> DeliveryResult {
        let url = match config.events_url() {
            Some(url) => url,
            None => {
                let result = DeliveryResult::skipped();
                report(P::KIND, &result);
                return result;
            }
        };

        let envelope = Envelope::new(payload, config.source_version.clone());
        let result = self.deliver(config, &url, &envelope).await;
        report(P::KIND, &result);
        result
    }

    /// Send several envelopes as one batch POST to the same endpoint.
    ///
    /// The batch succeeds or fails as a whole; partial acceptance on the
    /// Hub side is not modelled. An empty batch is a no-op success.
    pub async fn send_batch(
        &self,
        config: &HubConfig,
        envelopes: Vec<Envelope<serde_json::Value>>,
    ) -> DeliveryResult {
        let url = match config.events_url() {
            Some(url) => url,
            None => {
                let result = DeliveryResult::skipped();
                report_batch(envelopes.len(), &result);
                return result;
            }
        };

        if envelopes.is_empty() {
            return DeliveryResult {
                ok: true,
                attempts: 0,
                status: None,
                error: None,
            };
        }

        let result = self.deliver(config, &url, &envelopes).await;
        report_batch(envelopes.len(), &result);
        result
    }

    /// Fire-and-forget: spawn the send onto the runtime and detach.
    ///
    /// Returns immediately; the outcome is logged by the background task
    /// and is invisible to the caller. There is no way to cancel the
    /// delivery once dispatched — it runs to success or exhausted retries.
    pub fn dispatch<P>(&self, config: &HubConfig, payload: P)
    where
        P: HubPayload + Sync + 'static,
    {
        let client = self.clone();
        let config = config.clone();
        tokio::spawn(async move {
            client.send(&config, payload).await;
        });
    }

    /// Serialize `body` and run the retry loop over the transport.
    async fn deliver<T: serde::Serialize>(
        &self,
        config: &HubConfig,
        url: &str,
        body: &T,
    ) -> DeliveryResult {
        let body = match serde_json::to_string(body) {
            Ok(body) => body,
            Err(e) => {
                return DeliveryResult::failed(0, None, Some(format!("serialize error: {e}")))
            }
        };

        let token = config.token.as_deref();
        config
            .retry
            .run(|_attempt| {
                self.transport
                    .post_events(url, token, &body, config.request_timeout)
            })
            .await
    }
}

impl Default for HubClient {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Typed send helpers — one per event kind
// ---------------------------------------------------------------------------

impl HubClient {
    /// Notify the Hub that a resident profile was created.
    pub async fn send_resident_created(
        &self,
        config: &HubConfig,
        payload: ResidentCreated,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub that a resident profile was edited.
    pub async fn send_resident_updated(
        &self,
        config: &HubConfig,
        payload: ResidentUpdated,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub that a resident was archived.
    pub async fn send_resident_archived(
        &self,
        config: &HubConfig,
        payload: ResidentArchived,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub of a new resident observation.
    pub async fn send_observation_created(
        &self,
        config: &HubConfig,
        payload: ObservationCreated,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub that an incident was reported.
    pub async fn send_incident_created(
        &self,
        config: &HubConfig,
        payload: IncidentCreated,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub that an incident was resolved.
    pub async fn send_incident_resolved(
        &self,
        config: &HubConfig,
        payload: IncidentResolved,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub that a care task was scheduled.
    pub async fn send_care_task_created(
        &self,
        config: &HubConfig,
        payload: CareTaskCreated,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub of a care task status change.
    pub async fn send_care_task_status_changed(
        &self,
        config: &HubConfig,
        payload: CareTaskStatusChanged,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub that a care task was completed.
    pub async fn send_care_task_completed(
        &self,
        config: &HubConfig,
        payload: CareTaskCompleted,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub that a maintenance ticket was opened.
    pub async fn send_maintenance_ticket_created(
        &self,
        config: &HubConfig,
        payload: MaintenanceTicketCreated,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub of a maintenance ticket status change.
    pub async fn send_maintenance_ticket_status_changed(
        &self,
        config: &HubConfig,
        payload: MaintenanceTicketStatusChanged,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub that a maintenance ticket was completed.
    pub async fn send_maintenance_ticket_completed(
        &self,
        config: &HubConfig,
        payload: MaintenanceTicketCompleted,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub that a document was uploaded.
    pub async fn send_document_uploaded(
        &self,
        config: &HubConfig,
        payload: DocumentUploaded,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }

    /// Notify the Hub that a daily log entry was written.
    pub async fn send_daily_log_created(
        &self,
        config: &HubConfig,
        payload: DailyLogCreated,
    ) -> DeliveryResult {
        self.send(config, payload).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Uniform outcome value for a send operation, and its logging.
//!
//! Sends never return `Err`: every failure mode — unconfigured Hub,
//! non-2xx answer, network failure, timeout, exhausted retries — collapses
//! into a [`DeliveryResult`]. The reporter functions log that value for
//! operational visibility and change nothing about control flow.

use crate::config::NOT_CONFIGURED;
use crate::event::EventKind;

/// Outcome of one send operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryResult {
    /// Whether any attempt received a 2xx answer.
    pub ok: bool,
    /// Number of network attempts actually made.
    pub attempts: u32,
    /// Last HTTP status observed, if the Hub answered at all.
    pub status: Option<u16>,
    /// Last error detail; absent on success.
    pub error: Option<String>,
}

impl DeliveryResult {
    /// Successful delivery on attempt number `attempts`.
    pub fn delivered(attempts: u32, status: u16) -> Self {
        Self {
            ok: true,
            attempts,
            status: Some(status),
            error: None,
        }
    }

    /// All attempts exhausted without a 2xx answer.
    pub fn failed(attempts: u32, status: Option<u16>, error: Option<String>) -> Self {
        Self {
            ok: false,
            attempts,
            status,
            error,
        }
    }

    /// Delivery skipped because the Hub base URL is not configured.
    pub fn skipped() -> Self {
        Self {
            ok: false,
            attempts: 0,
            status: None,
            error: Some(NOT_CONFIGURED.to_string()),
        }
    }

    /// True when this is the missing-configuration short-circuit.
    pub fn is_skipped(&self) -> bool {
        self.attempts == 0 && self.error.as_deref() == Some(NOT_CONFIGURED)
    }
}

/// Log the outcome of a single-event send at the appropriate severity.
pub fn report(kind: EventKind, result: &DeliveryResult) {
    if result.ok {
        tracing::info!(
            event_type = %kind,
            attempts = result.attempts,
            "Hub event delivered"
        );
    } else if result.is_skipped() {
        tracing::debug!(event_type = %kind, "Hub not configured, event delivery skipped");
    } else {
        tracing::error!(
            event_type = %kind,
            attempts = result.attempts,
            status = result.status.map(u64::from),
            error = result.error.as_deref().unwrap_or("unknown"),
            "Hub event delivery failed"
        );
    }
}

/// Log the outcome of a batch send.
pub fn report_batch(events: usize, result: &DeliveryResult) {
    if result.ok {
        tracing::info!(
            events,
            attempts = result.attempts,
            "Hub event batch delivered"
        );
    } else if result.is_skipped() {
        tracing::debug!(events, "Hub not configured, event batch skipped");
    } else {
        tracing::error!(
            events,
            attempts = result.attempts,
            status = result.status.map(u64::from),
            error = result.error.as_deref().unwrap_or("unknown"),
            "Hub event batch delivery failed"
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

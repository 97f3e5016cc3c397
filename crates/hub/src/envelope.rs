//! Wire-format envelope wrapped around every outbound payload.
//!
//! The Hub receives `{type, source, source_version, received_at, payload}`.
//! Construction is pure and infallible; `received_at` is captured when the
//! envelope is built, so retries of the same envelope carry the timestamp
//! of the domain event becoming known, not of the network attempt.

use chrono::Utc;
use serde::Serialize;
use solhem_core::types::Timestamp;

use crate::event::{EventKind, HubPayload};

/// Fixed tag identifying this system as the event source.
pub const SOURCE_TAG: &str = "solhem-backend";

/// Delivery metadata plus the domain payload, as POSTed to the Hub.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<P> {
    /// Wire name of the event kind.
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Always [`SOURCE_TAG`].
    pub source: &'static str,
    /// Version tag of the emitting system, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_version: Option<String>,
    /// When this envelope was constructed (UTC).
    pub received_at: Timestamp,
    /// Event-specific fields.
    pub payload: P,
}

impl<P: HubPayload> Envelope<P> {
    /// Wrap `payload` with delivery metadata, stamping `received_at` now.
    pub fn new(payload: P, source_version: Option<String>) -> Self {
        Self {
            kind: P::KIND,
            source: SOURCE_TAG,
            source_version,
            received_at: Utc::now(),
            payload,
        }
    }
}

impl<P: Serialize> Envelope<P> {
    /// Erase the payload type for heterogeneous batch delivery.
    pub fn erased(self) -> Envelope<serde_json::Value> {
        Envelope {
            kind: self.kind,
            source: self.source,
            source_version: self.source_version,
            received_at: self.received_at,
            payload: serde_json::to_value(&self.payload).unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

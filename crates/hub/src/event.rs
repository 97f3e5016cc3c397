//! Event taxonomy for outbound Hub notifications.
//!
//! [`EventKind`] is the closed set of event types the platform emits.
//! Every kind has exactly one payload struct, bound to it statically
//! through [`HubPayload`], so a payload/kind mismatch cannot compile.
//! Payload *values* are not validated here; callers construct them from
//! data that already passed the route-handler boundary.

use serde::Serialize;
use solhem_core::types::{
    CareTaskStatus, DocumentCategory, EntityId, MaintenanceStatus, Metadata, ObservationType,
    Severity, Timestamp,
};

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// Closed set of event types accepted by the Hub.
///
/// Serialized as the dot-separated wire name, e.g. `"observation.created"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    #[serde(rename = "resident.created")]
    ResidentCreated,
    #[serde(rename = "resident.updated")]
    ResidentUpdated,
    #[serde(rename = "resident.archived")]
    ResidentArchived,
    #[serde(rename = "observation.created")]
    ObservationCreated,
    #[serde(rename = "incident.created")]
    IncidentCreated,
    #[serde(rename = "incident.resolved")]
    IncidentResolved,
    #[serde(rename = "care_task.created")]
    CareTaskCreated,
    #[serde(rename = "care_task.status_changed")]
    CareTaskStatusChanged,
    #[serde(rename = "care_task.completed")]
    CareTaskCompleted,
    #[serde(rename = "maintenance_ticket.created")]
    MaintenanceTicketCreated,
    #[serde(rename = "maintenance_ticket.status_changed")]
    MaintenanceTicketStatusChanged,
    #[serde(rename = "maintenance_ticket.completed")]
    MaintenanceTicketCompleted,
    #[serde(rename = "document.uploaded")]
    DocumentUploaded,
    #[serde(rename = "daily_log.created")]
    DailyLogCreated,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [EventKind; 14] = [
        EventKind::ResidentCreated,
        EventKind::ResidentUpdated,
        EventKind::ResidentArchived,
        EventKind::ObservationCreated,
        EventKind::IncidentCreated,
        EventKind::IncidentResolved,
        EventKind::CareTaskCreated,
        EventKind::CareTaskStatusChanged,
        EventKind::CareTaskCompleted,
        EventKind::MaintenanceTicketCreated,
        EventKind::MaintenanceTicketStatusChanged,
        EventKind::MaintenanceTicketCompleted,
        EventKind::DocumentUploaded,
        EventKind::DailyLogCreated,
    ];

    /// Dot-separated wire name, e.g. `"care_task.status_changed"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::ResidentCreated => "resident.created",
            EventKind::ResidentUpdated => "resident.updated",
            EventKind::ResidentArchived => "resident.archived",
            EventKind::ObservationCreated => "observation.created",
            EventKind::IncidentCreated => "incident.created",
            EventKind::IncidentResolved => "incident.resolved",
            EventKind::CareTaskCreated => "care_task.created",
            EventKind::CareTaskStatusChanged => "care_task.status_changed",
            EventKind::CareTaskCompleted => "care_task.completed",
            EventKind::MaintenanceTicketCreated => "maintenance_ticket.created",
            EventKind::MaintenanceTicketStatusChanged => "maintenance_ticket.status_changed",
            EventKind::MaintenanceTicketCompleted => "maintenance_ticket.completed",
            EventKind::DocumentUploaded => "document.uploaded",
            EventKind::DailyLogCreated => "daily_log.created",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payload shape statically bound to its [`EventKind`].
pub trait HubPayload: Serialize + Send {
    /// The event kind this payload belongs to.
    const KIND: EventKind;
}

// ---------------------------------------------------------------------------
// Payload shapes
// ---------------------------------------------------------------------------

/// A resident profile was created.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentCreated {
    pub resident_id: EntityId,
    pub residence_id: EntityId,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub created_at: Timestamp,
}

impl HubPayload for ResidentCreated {
    const KIND: EventKind = EventKind::ResidentCreated;
}

/// A resident profile was edited.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentUpdated {
    pub resident_id: EntityId,
    pub residence_id: EntityId,
    /// Names of the fields that changed, as stored upstream.
    pub updated_fields: Vec<String>,
    pub updated_at: Timestamp,
}

impl HubPayload for ResidentUpdated {
    const KIND: EventKind = EventKind::ResidentUpdated;
}

/// A resident was archived (moved out or deceased).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentArchived {
    pub resident_id: EntityId,
    pub residence_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub archived_at: Timestamp,
}

impl HubPayload for ResidentArchived {
    const KIND: EventKind = EventKind::ResidentArchived;
}

/// A staff observation was recorded for a resident.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationCreated {
    pub observation_id: EntityId,
    pub resident_id: EntityId,
    pub residence_id: EntityId,
    pub observation_type: ObservationType,
    pub severity: Severity,
    pub content: String,
    pub created_at: Timestamp,
    pub visible_to_family: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl HubPayload for ObservationCreated {
    const KIND: EventKind = EventKind::ObservationCreated;
}

/// An incident was reported.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentCreated {
    pub incident_id: EntityId,
    /// Absent for incidents not tied to a single resident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<EntityId>,
    pub residence_id: EntityId,
    pub severity: Severity,
    pub description: String,
    pub occurred_at: Timestamp,
    pub reported_by: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl HubPayload for IncidentCreated {
    const KIND: EventKind = EventKind::IncidentCreated;
}

/// An incident was closed out.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentResolved {
    pub incident_id: EntityId,
    pub residence_id: EntityId,
    pub resolved_by: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    pub resolved_at: Timestamp,
}

impl HubPayload for IncidentResolved {
    const KIND: EventKind = EventKind::IncidentResolved;
}

/// A care task was scheduled for a resident.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareTaskCreated {
    pub care_task_id: EntityId,
    pub resident_id: EntityId,
    pub residence_id: EntityId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl HubPayload for CareTaskCreated {
    const KIND: EventKind = EventKind::CareTaskCreated;
}

/// A care task moved to a new lifecycle state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareTaskStatusChanged {
    pub care_task_id: EntityId,
    pub resident_id: EntityId,
    pub status: CareTaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<CareTaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_by: Option<EntityId>,
    pub changed_at: Timestamp,
}

impl HubPayload for CareTaskStatusChanged {
    const KIND: EventKind = EventKind::CareTaskStatusChanged;
}

/// A care task was completed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareTaskCompleted {
    pub care_task_id: EntityId,
    pub resident_id: EntityId,
    pub completed_by: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub completed_at: Timestamp,
}

impl HubPayload for CareTaskCompleted {
    const KIND: EventKind = EventKind::CareTaskCompleted;
}

/// A maintenance ticket was opened.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTicketCreated {
    pub ticket_id: EntityId,
    pub residence_id: EntityId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub priority: Severity,
    pub reported_by: EntityId,
    pub created_at: Timestamp,
}

impl HubPayload for MaintenanceTicketCreated {
    const KIND: EventKind = EventKind::MaintenanceTicketCreated;
}

/// A maintenance ticket moved to a new lifecycle state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTicketStatusChanged {
    pub ticket_id: EntityId,
    pub residence_id: EntityId,
    pub status: MaintenanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<MaintenanceStatus>,
    pub changed_at: Timestamp,
}

impl HubPayload for MaintenanceTicketStatusChanged {
    const KIND: EventKind = EventKind::MaintenanceTicketStatusChanged;
}

/// A maintenance ticket was completed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTicketCompleted {
    pub ticket_id: EntityId,
    pub residence_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<EntityId>,
    pub completed_at: Timestamp,
}

impl HubPayload for MaintenanceTicketCompleted {
    const KIND: EventKind = EventKind::MaintenanceTicketCompleted;
}

/// A document was attached to a resident or residence.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUploaded {
    pub document_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<EntityId>,
    pub residence_id: EntityId,
    pub category: DocumentCategory,
    pub file_name: String,
    pub uploaded_by: EntityId,
    pub uploaded_at: Timestamp,
}

impl HubPayload for DocumentUploaded {
    const KIND: EventKind = EventKind::DocumentUploaded;
}

/// A daily log entry was written for a resident.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogCreated {
    pub log_id: EntityId,
    pub resident_id: EntityId,
    pub residence_id: EntityId,
    pub summary: String,
    pub created_by: EntityId,
    pub created_at: Timestamp,
    pub visible_to_family: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl HubPayload for DailyLogCreated {
    const KIND: EventKind = EventKind::DailyLogCreated;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

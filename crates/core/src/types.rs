use serde::{Deserialize, Serialize};

/// All entity identifiers are opaque strings assigned by the upstream store.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Open key/value extension data carried by some event payloads.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Category of a resident observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObservationType {
    Clinical,
    Behavioral,
    Nutrition,
    Hygiene,
    Social,
}

/// Severity grading shared by observations, incidents and tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Lifecycle states of a care task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CareTaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Lifecycle states of a maintenance ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

/// Classification of an uploaded resident document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentCategory {
    Medical,
    Administrative,
    Legal,
    Photo,
    Other,
}

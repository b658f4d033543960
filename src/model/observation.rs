//! Observation: one journaled entry.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanRole, ObjectState};

/// A single journaled observation: free text plus a snapshot of both
/// classification axes at the moment it was written.
///
/// Immutable once created. Persisted with camelCase keys and the timestamp
/// as integer milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: Uuid,

    #[serde(with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub timestamp: Timestamp,

    /// Trimmed, never empty.
    pub content: String,

    pub object_state: ObjectState,

    pub human_role: HumanRole,
}

/// The current instant, truncated to the millisecond precision observations
/// are persisted with.
pub(crate) fn now_millis() -> Timestamp {
    let now = Timestamp::now();
    Timestamp::from_millisecond(now.as_millisecond()).unwrap_or(now)
}

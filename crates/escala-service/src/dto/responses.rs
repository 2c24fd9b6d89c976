//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use escala_core::{ConflictingSlot, InviteStatus, SameDayConflict, SlotMode};
use serde::Serialize;

// ============================================================================
// Ministry Responses
// ============================================================================

/// Ministry response
#[derive(Debug, Clone, Serialize)]
pub struct MinistryResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Slot Responses
// ============================================================================

/// Basic slot response
#[derive(Debug, Clone, Serialize)]
pub struct SlotResponse {
    pub id: String,
    pub ministry_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub mode: SlotMode,
    pub capacity: i32,
}

/// Slot response with the advisory confirmed-assignment count
#[derive(Debug, Clone, Serialize)]
pub struct SlotWithCountResponse {
    #[serde(flatten)]
    pub slot: SlotResponse,
    pub confirmed_count: i64,
}

// ============================================================================
// Invite / Assignment Responses
// ============================================================================

/// Slot invite response
#[derive(Debug, Clone, Serialize)]
pub struct InviteResponse {
    pub id: String,
    pub slot_id: String,
    pub email: String,
    pub status: InviteStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Assignment response
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentResponse {
    pub id: String,
    pub slot_id: String,
    pub user_id: String,
    pub assigned_by: String,
    pub assigned_at: DateTime<Utc>,
}

/// Result of accepting an invite: the resolved invite plus the confirmed
/// assignment (pre-existing when the accept was idempotent)
#[derive(Debug, Clone, Serialize)]
pub struct AcceptInviteResponse {
    pub invite: InviteResponse,
    pub assignment: AssignmentResponse,
}

// ============================================================================
// Conflict Probe Responses
// ============================================================================

/// Advisory conflict probe result. Never authoritative: it is not atomic
/// with any mutation.
#[derive(Debug, Clone, Serialize)]
pub struct ConflictProbeResponse {
    pub has_conflict: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_slot: Option<ConflictingSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ConflictProbeResponse {
    /// The probed date is clear
    #[must_use]
    pub fn clear() -> Self {
        Self {
            has_conflict: false,
            conflicting_slot: None,
            message: None,
        }
    }
}

impl From<Option<SameDayConflict>> for ConflictProbeResponse {
    fn from(conflict: Option<SameDayConflict>) -> Self {
        match conflict {
            Some(c) => Self {
                has_conflict: true,
                conflicting_slot: Some(c.conflicting_slot),
                message: Some(c.message),
            },
            None => Self::clear(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escala_core::Snowflake;

    #[test]
    fn test_probe_response_from_conflict() {
        let conflict = SameDayConflict {
            conflicting_slot: ConflictingSlot {
                id: Snowflake::new(7),
                title: "Morning shift".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                ministry_title: "Reception".to_string(),
            },
            message: "Already scheduled".to_string(),
        };

        let response = ConflictProbeResponse::from(Some(conflict));
        assert!(response.has_conflict);
        assert!(response.message.is_some());

        let clear = ConflictProbeResponse::from(None);
        assert!(!clear.has_conflict);
        assert!(clear.conflicting_slot.is_none());
    }

    #[test]
    fn test_readiness_status() {
        assert_eq!(ReadinessResponse::ready(true).status, "ready");
        assert_eq!(ReadinessResponse::ready(false).status, "degraded");
    }
}

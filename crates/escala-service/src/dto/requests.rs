//! Request DTOs for API endpoints
//!
//! Plain CRUD requests implement `Deserialize` and `Validate`. The schedule
//! action request is a tagged sum type over the three conflict-gated
//! operations, dispatched by pattern matching.

use chrono::{NaiveDate, NaiveTime};
use escala_core::{SlotMode, Snowflake};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Schedule Actions (the conflict-gated operations)
// ============================================================================

/// The three atomic intents accepted by the schedule action endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScheduleAction {
    /// Offer a slot to an email address (admin)
    CreateInvite { slot_id: Snowflake, email: String },
    /// Accept a pending invitation as the given member
    AcceptInvite {
        invite_id: Snowflake,
        user_id: Snowflake,
    },
    /// Enroll a member directly (free-mode slots)
    SelfAssign {
        slot_id: Snowflake,
        user_id: Snowflake,
        #[serde(default)]
        assigned_by: Option<Snowflake>,
    },
}

impl ScheduleAction {
    /// Stable name for logging and dispatch spans
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateInvite { .. } => "create_invite",
            Self::AcceptInvite { .. } => "accept_invite",
            Self::SelfAssign { .. } => "self_assign",
        }
    }
}

// ============================================================================
// Ministry Requests
// ============================================================================

/// Create ministry request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMinistryRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub date: NaiveDate,
}

/// Update ministry request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMinistryRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub date: Option<NaiveDate>,
}

// ============================================================================
// Slot Requests
// ============================================================================

/// Create slot request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSlotRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    #[serde(default)]
    pub mode: SlotMode,

    #[validate(range(min = 1, message = "Capacity must be positive"))]
    pub capacity: i32,
}

/// Update slot request
///
/// Date changes are rejected downstream while the slot has confirmed
/// assignments.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSlotRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub mode: Option<SlotMode>,

    #[validate(range(min = 1, message = "Capacity must be positive"))]
    pub capacity: Option<i32>,
}

//! Test fixtures and data generators
//!
//! Provides reusable request/response shapes for integration tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create ministry request
#[derive(Debug, Serialize)]
pub struct CreateMinistry {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl CreateMinistry {
    pub fn unique(date: NaiveDate) -> Self {
        Self {
            title: format!("Test Ministry {}", unique_suffix()),
            description: Some("Integration test ministry".to_string()),
            date,
        }
    }
}

/// Create slot request
#[derive(Debug, Serialize)]
pub struct CreateSlot {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub mode: String,
    pub capacity: i32,
}

impl CreateSlot {
    pub fn unique(date: NaiveDate, capacity: i32) -> Self {
        Self {
            title: format!("Test Shift {}", unique_suffix()),
            date,
            start_time: "08:00:00".to_string(),
            end_time: "12:00:00".to_string(),
            mode: "free".to_string(),
            capacity,
        }
    }
}

/// Build a create_invite action body
pub fn create_invite_action(slot_id: &str, email: &str) -> serde_json::Value {
    json!({ "action": "create_invite", "slot_id": slot_id, "email": email })
}

/// Build an accept_invite action body
pub fn accept_invite_action(invite_id: &str, user_id: &str) -> serde_json::Value {
    json!({ "action": "accept_invite", "invite_id": invite_id, "user_id": user_id })
}

/// Build a self_assign action body
pub fn self_assign_action(slot_id: &str, user_id: &str) -> serde_json::Value {
    json!({ "action": "self_assign", "slot_id": slot_id, "user_id": user_id })
}

/// Ministry response
#[derive(Debug, Deserialize)]
pub struct MinistryBody {
    pub id: String,
    pub title: String,
}

/// Slot response
#[derive(Debug, Deserialize)]
pub struct SlotBody {
    pub id: String,
    pub ministry_id: String,
    pub mode: String,
    pub capacity: i32,
}

/// Invite response
#[derive(Debug, Deserialize)]
pub struct InviteBody {
    pub id: String,
    pub slot_id: String,
    pub email: String,
    pub status: String,
}

/// Assignment response
#[derive(Debug, Deserialize)]
pub struct AssignmentBody {
    pub id: String,
    pub slot_id: String,
    pub user_id: String,
    pub assigned_by: String,
}

/// Accept response (invite + assignment)
#[derive(Debug, Deserialize)]
pub struct AcceptBody {
    pub invite: InviteBody,
    pub assignment: AssignmentBody,
}

/// Action success envelope
#[derive(Debug, Deserialize)]
pub struct ActionSuccess<T> {
    pub success: bool,
    pub data: T,
}

/// Conflicting slot payload inside a 409 response
#[derive(Debug, Deserialize)]
pub struct ConflictingSlotBody {
    pub id: String,
    pub title: String,
    pub ministry_title: String,
}

/// Action failure envelope
#[derive(Debug, Deserialize)]
pub struct ActionFailure {
    pub success: bool,
    pub error: String,
    pub code: String,
    pub conflict: Option<ConflictBody>,
}

/// Structured conflict payload
#[derive(Debug, Deserialize)]
pub struct ConflictBody {
    pub conflicting_slot: ConflictingSlotBody,
    pub message: String,
}

/// Conflict probe response
#[derive(Debug, Deserialize)]
pub struct ProbeBody {
    pub has_conflict: bool,
    pub message: Option<String>,
}

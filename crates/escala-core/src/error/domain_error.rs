//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::InviteStatus;
use crate::scheduling::SameDayConflict;
use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Ministry not found: {0}")]
    MinistryNotFound(Snowflake),

    #[error("Slot not found: {0}")]
    SlotNotFound(Snowflake),

    #[error("Invite not found: {0}")]
    InviteNotFound(Snowflake),

    #[error("Assignment not found")]
    AssignmentNotFound,

    // =========================================================================
    // State Errors
    // =========================================================================
    /// The invite already left the pending state; accept/decline are invalid
    #[error("Invite already responded: {0}")]
    InviteAlreadyResponded(InviteStatus),

    // =========================================================================
    // Scheduling Conflicts
    // =========================================================================
    /// The member already holds a confirmed assignment on the target date.
    /// Carries the blocking slot so callers can render which booking is in
    /// the way.
    #[error("{}", .0.message)]
    ScheduleConflict(SameDayConflict),

    /// The member already holds this exact assignment (same slot, not a
    /// different same-day slot)
    #[error("Already enrolled in this slot")]
    AlreadyAssigned,

    /// The slot's confirmed assignments have reached its capacity
    #[error("Slot is full: capacity {capacity} reached")]
    SlotCapacityReached { capacity: i32 },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::MinistryNotFound(_) => "UNKNOWN_MINISTRY",
            Self::SlotNotFound(_) => "UNKNOWN_SLOT",
            Self::InviteNotFound(_) => "UNKNOWN_INVITE",
            Self::AssignmentNotFound => "UNKNOWN_ASSIGNMENT",

            // State
            Self::InviteAlreadyResponded(_) => "INVITE_ALREADY_RESPONDED",

            // Scheduling
            Self::ScheduleConflict(_) => "SCHEDULE_CONFLICT",
            Self::AlreadyAssigned => "ALREADY_ASSIGNED",
            Self::SlotCapacityReached { .. } => "SLOT_CAPACITY_REACHED",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::MinistryNotFound(_)
                | Self::SlotNotFound(_)
                | Self::InviteNotFound(_)
                | Self::AssignmentNotFound
        )
    }

    /// Check if this is a conflict-family error (HTTP 409)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::ScheduleConflict(_)
                | Self::AlreadyAssigned
                | Self::SlotCapacityReached { .. }
                | Self::InviteAlreadyResponded(_)
        )
    }

    /// Check if this is specifically a same-day schedule conflict
    pub fn is_schedule_conflict(&self) -> bool {
        matches!(self, Self::ScheduleConflict(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidEmail)
    }

    /// Borrow the structured conflict payload, if any
    pub fn schedule_conflict(&self) -> Option<&SameDayConflict> {
        match self {
            Self::ScheduleConflict(conflict) => Some(conflict),
            _ => None,
        }
    }
}

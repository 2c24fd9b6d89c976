//! Entity -> response DTO mappers

use escala_core::entities::{Assignment, Ministry, Slot, SlotInvite};

use super::responses::{
    AssignmentResponse, InviteResponse, MinistryResponse, SlotResponse, SlotWithCountResponse,
};

impl From<Ministry> for MinistryResponse {
    fn from(ministry: Ministry) -> Self {
        Self {
            id: ministry.id.to_string(),
            title: ministry.title,
            description: ministry.description,
            date: ministry.date,
            created_by: ministry.created_by.to_string(),
            created_at: ministry.created_at,
        }
    }
}

impl From<Slot> for SlotResponse {
    fn from(slot: Slot) -> Self {
        Self {
            id: slot.id.to_string(),
            ministry_id: slot.ministry_id.to_string(),
            title: slot.title,
            description: slot.description,
            date: slot.date,
            start_time: slot.start_time,
            end_time: slot.end_time,
            mode: slot.mode,
            capacity: slot.capacity,
        }
    }
}

impl SlotWithCountResponse {
    /// Pair a slot with its confirmed-assignment count
    pub fn new(slot: Slot, confirmed_count: i64) -> Self {
        Self {
            slot: SlotResponse::from(slot),
            confirmed_count,
        }
    }
}

impl From<SlotInvite> for InviteResponse {
    fn from(invite: SlotInvite) -> Self {
        Self {
            id: invite.id.to_string(),
            slot_id: invite.slot_id.to_string(),
            email: invite.email,
            status: invite.status,
            accepted_by: invite.accepted_by.map(|id| id.to_string()),
            accepted_at: invite.accepted_at,
            created_at: invite.created_at,
        }
    }
}

impl From<Assignment> for AssignmentResponse {
    fn from(assignment: Assignment) -> Self {
        Self {
            id: assignment.id.to_string(),
            slot_id: assignment.slot_id.to_string(),
            user_id: assignment.user_id.to_string(),
            assigned_by: assignment.assigned_by.to_string(),
            assigned_at: assignment.assigned_at,
        }
    }
}

//! SlotInvite database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the slot_invites table
#[derive(Debug, Clone, FromRow)]
pub struct SlotInviteModel {
    pub id: i64,
    pub slot_id: i64,
    pub email: String,
    pub status: String,
    pub accepted_by: Option<i64>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl SlotInviteModel {
    /// Check if the invite is still awaiting a response
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }
}

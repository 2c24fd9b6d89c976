//! SlotInvite entity - a pending/accepted/declined offer of a slot to an email
//!
//! At most one invite exists per (slot, email) pair at any time; re-inviting
//! replaces the previous row regardless of its status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Invite lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl InviteStatus {
    /// String form as stored in the database
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    /// Terminal states admit no further transitions (other than deletion)
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::str::FromStr for InviteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            other => Err(format!("unknown invite status: {other}")),
        }
    }
}

impl std::fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize an invite email for storage and lookups: trimmed, lowercased
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// SlotInvite entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotInvite {
    pub id: Snowflake,
    pub slot_id: Snowflake,
    /// Target address. May or may not resolve to a registered member.
    pub email: String,
    pub status: InviteStatus,
    pub accepted_by: Option<Snowflake>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl SlotInvite {
    /// Create a fresh pending invite; the email is normalized
    pub fn new(id: Snowflake, slot_id: Snowflake, email: &str) -> Self {
        Self {
            id,
            slot_id,
            email: normalize_email(email),
            status: InviteStatus::Pending,
            accepted_by: None,
            accepted_at: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the invite is still awaiting a response
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == InviteStatus::Pending
    }

    /// Accept is only valid from the pending state
    #[inline]
    pub fn can_accept(&self) -> bool {
        self.is_pending()
    }

    /// Decline is only valid from the pending state
    #[inline]
    pub fn can_decline(&self) -> bool {
        self.is_pending()
    }

    /// Transition to accepted, recording who accepted and when
    pub fn mark_accepted(&mut self, user_id: Snowflake, at: DateTime<Utc>) {
        self.status = InviteStatus::Accepted;
        self.accepted_by = Some(user_id);
        self.accepted_at = Some(at);
    }

    /// Transition to declined (terminal, produces no assignment)
    pub fn mark_declined(&mut self) {
        self.status = InviteStatus::Declined;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_invite() -> SlotInvite {
        SlotInvite::new(Snowflake::new(1), Snowflake::new(10), "Ana@Example.com ")
    }

    #[test]
    fn test_new_invite_is_pending_with_normalized_email() {
        let invite = pending_invite();
        assert!(invite.is_pending());
        assert_eq!(invite.email, "ana@example.com");
        assert!(invite.accepted_by.is_none());
        assert!(invite.accepted_at.is_none());
    }

    #[test]
    fn test_accept_transition() {
        let mut invite = pending_invite();
        assert!(invite.can_accept());

        let now = Utc::now();
        invite.mark_accepted(Snowflake::new(42), now);

        assert_eq!(invite.status, InviteStatus::Accepted);
        assert_eq!(invite.accepted_by, Some(Snowflake::new(42)));
        assert_eq!(invite.accepted_at, Some(now));
        assert!(!invite.can_accept());
        assert!(!invite.can_decline());
    }

    #[test]
    fn test_decline_transition_is_terminal() {
        let mut invite = pending_invite();
        assert!(invite.can_decline());

        invite.mark_declined();
        assert_eq!(invite.status, InviteStatus::Declined);
        assert!(invite.status.is_terminal());
        assert!(!invite.can_accept());
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [InviteStatus::Pending, InviteStatus::Accepted, InviteStatus::Declined] {
            assert_eq!(status.as_str().parse::<InviteStatus>().unwrap(), status);
        }
        assert!("expired".parse::<InviteStatus>().is_err());
    }
}

//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{Assignment, Ministry, Slot, SlotInvite, User};
use crate::error::DomainError;
use crate::scheduling::AssignedSlot;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email (case-insensitive, trimmed)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Ministry Repository
// ============================================================================

#[async_trait]
pub trait MinistryRepository: Send + Sync {
    /// Find ministry by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Ministry>>;

    /// List all ministries, most recent date first
    async fn list(&self) -> RepoResult<Vec<Ministry>>;

    /// Create a new ministry
    async fn create(&self, ministry: &Ministry) -> RepoResult<()>;

    /// Update an existing ministry
    async fn update(&self, ministry: &Ministry) -> RepoResult<()>;

    /// Delete a ministry (cascades to its slots)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Slot Repository
// ============================================================================

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Find slot by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Slot>>;

    /// List all slots in a ministry, ordered by date then start time
    async fn find_by_ministry(&self, ministry_id: Snowflake) -> RepoResult<Vec<Slot>>;

    /// Create a new slot
    async fn create(&self, slot: &Slot) -> RepoResult<()>;

    /// Update an existing slot
    async fn update(&self, slot: &Slot) -> RepoResult<()>;

    /// Delete a slot
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Assignment Repository
// ============================================================================

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Find the assignment tying a member to a slot, if any
    async fn find(&self, slot_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Assignment>>;

    /// List all assignments for a slot
    async fn find_by_slot(&self, slot_id: Snowflake) -> RepoResult<Vec<Assignment>>;

    /// Load every confirmed assignment of a member joined with its slot's
    /// date, times, and ministry title. This is the conflict checker's feed.
    async fn find_assigned_slots(&self, user_id: Snowflake) -> RepoResult<Vec<AssignedSlot>>;

    /// Count confirmed assignments for a slot (capacity checks)
    async fn count_for_slot(&self, slot_id: Snowflake) -> RepoResult<i64>;

    /// Insert a confirmed assignment. `slot_date` is the slot's calendar day,
    /// denormalized into the row so the store can enforce the one-per-day
    /// uniqueness backstop. Fails with `AlreadyAssigned` on a duplicate
    /// (slot, user) pair and with `ScheduleConflict` when the per-day
    /// backstop fires.
    async fn create(&self, assignment: &Assignment, slot_date: NaiveDate) -> RepoResult<()>;

    /// Remove a member's assignment from a slot. Unconditional; removal can
    /// never create a conflict.
    async fn delete(&self, slot_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Slot Invite Repository
// ============================================================================

#[async_trait]
pub trait SlotInviteRepository: Send + Sync {
    /// Find invite by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SlotInvite>>;

    /// List invites for a slot, newest first
    async fn find_by_slot(&self, slot_id: Snowflake) -> RepoResult<Vec<SlotInvite>>;

    /// List invites addressed to an email (normalized)
    async fn find_by_email(&self, email: &str) -> RepoResult<Vec<SlotInvite>>;

    /// Insert a fresh pending invite, removing any prior invite for the same
    /// (slot, email) pair first. Both mutations happen atomically.
    async fn replace(&self, invite: &SlotInvite) -> RepoResult<()>;

    /// Transition a pending invite to accepted
    async fn mark_accepted(
        &self,
        id: Snowflake,
        user_id: Snowflake,
        at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Transition a pending invite to declined
    async fn mark_declined(&self, id: Snowflake) -> RepoResult<()>;

    /// Hard-delete an invite, permitted from any state
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

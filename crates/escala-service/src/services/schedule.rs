//! Schedule service - the conflict-gated assignment engine
//!
//! Implements the three atomic intents (create invite, accept invite,
//! self-assign) plus the invitation lifecycle (decline, delete) and
//! unassignment. Every conflict-gated operation runs check-then-write while
//! holding the target member's lock; the store's unique indexes remain the
//! backstop underneath.

use chrono::{NaiveDate, Utc};
use escala_core::entities::{Assignment, Slot, SlotInvite};
use escala_core::scheduling::find_same_day_conflict;
use escala_core::{normalize_email, DomainError, SameDayConflict, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    AcceptInviteResponse, AssignmentResponse, ConflictProbeResponse, InviteResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Schedule service
pub struct ScheduleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScheduleService<'a> {
    /// Create a new ScheduleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Conflict checking
    // ========================================================================

    /// Load the member's confirmed assignments and look for one on
    /// `target_date`, other than the excluded slot. Read-only; callers that
    /// mutate must hold the member's lock across this call and the write.
    async fn check_conflict(
        &self,
        user_id: Snowflake,
        target_date: NaiveDate,
        exclude_slot: Option<Snowflake>,
    ) -> ServiceResult<Option<SameDayConflict>> {
        let assigned = self.ctx.assignment_repo().find_assigned_slots(user_id).await?;
        Ok(find_same_day_conflict(&assigned, target_date, exclude_slot))
    }

    /// Fail with the structured conflict error when the date is taken
    async fn ensure_no_conflict(
        &self,
        user_id: Snowflake,
        target_date: NaiveDate,
        exclude_slot: Option<Snowflake>,
    ) -> ServiceResult<()> {
        match self.check_conflict(user_id, target_date, exclude_slot).await? {
            Some(conflict) => Err(DomainError::ScheduleConflict(conflict).into()),
            None => Ok(()),
        }
    }

    /// Capacity is a hard invariant at the confirmation boundaries
    async fn ensure_capacity(&self, slot: &Slot) -> ServiceResult<()> {
        let confirmed = self.ctx.assignment_repo().count_for_slot(slot.id).await?;
        if !slot.has_room_for(confirmed) {
            return Err(DomainError::SlotCapacityReached {
                capacity: slot.capacity,
            }
            .into());
        }
        Ok(())
    }

    async fn resolve_slot(&self, slot_id: Snowflake) -> ServiceResult<Slot> {
        self.ctx
            .slot_repo()
            .find_by_id(slot_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Slot", slot_id.to_string()))
    }

    // ========================================================================
    // Create invitation
    // ========================================================================

    /// Offer a slot to an email address.
    ///
    /// When the email resolves to a registered member, the offer is
    /// conflict-gated against that member's confirmed assignments. Any prior
    /// invite for the same (slot, email) pair is superseded, whatever its
    /// status. Unregistered invitees hold no assignments and skip the check.
    #[instrument(skip(self))]
    pub async fn create_invite(
        &self,
        slot_id: Snowflake,
        email: &str,
    ) -> ServiceResult<InviteResponse> {
        let slot = self.resolve_slot(slot_id).await?;

        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::InvalidEmail.into());
        }

        let member = self.ctx.user_repo().find_by_email(&email).await?;

        // Lock is held through the replace so a concurrent accept for the
        // same member cannot slip between the check and the write.
        let _guard = match &member {
            Some(m) => Some(self.ctx.member_locks().acquire(m.id).await),
            None => None,
        };

        if let Some(member) = &member {
            self.ensure_no_conflict(member.id, slot.date, Some(slot.id))
                .await?;
        }

        let invite = SlotInvite::new(self.ctx.generate_id(), slot.id, &email);
        self.ctx.invite_repo().replace(&invite).await?;

        info!(
            invite_id = %invite.id,
            slot_id = %slot.id,
            email = %invite.email,
            resolved_member = member.is_some(),
            "Invite created"
        );

        Ok(InviteResponse::from(invite))
    }

    // ========================================================================
    // Accept invitation
    // ========================================================================

    /// Accept a pending invitation as `user_id`.
    ///
    /// First-accept-wins: several pending invites may share a calendar date,
    /// but the first acceptance confirms an assignment and every later
    /// acceptance for that date fails the conflict check (the losing invite
    /// stays pending for the member to decline or an admin to retract).
    #[instrument(skip(self))]
    pub async fn accept_invite(
        &self,
        invite_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<AcceptInviteResponse> {
        let mut invite = self
            .ctx
            .invite_repo()
            .find_by_id(invite_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Invite", invite_id.to_string()))?;

        if !invite.can_accept() {
            return Err(DomainError::InviteAlreadyResponded(invite.status).into());
        }

        let slot = self.resolve_slot(invite.slot_id).await?;

        let _guard = self.ctx.member_locks().acquire(user_id).await;

        self.ensure_no_conflict(user_id, slot.date, Some(slot.id))
            .await?;

        // The member may already be on this exact slot (same slot, not a
        // different same-day one). The desired end state holds, so the accept
        // stands and the existing row is returned; capacity is only checked
        // when a new seat is actually taken.
        let existing = self.ctx.assignment_repo().find(slot.id, user_id).await?;
        if existing.is_none() {
            self.ensure_capacity(&slot).await?;
        }

        let now = Utc::now();
        self.ctx
            .invite_repo()
            .mark_accepted(invite.id, user_id, now)
            .await?;
        invite.mark_accepted(user_id, now);

        let assignment = match existing {
            Some(assignment) => assignment,
            None => {
                let assignment =
                    Assignment::new(self.ctx.generate_id(), slot.id, user_id, user_id);
                self.ctx
                    .assignment_repo()
                    .create(&assignment, slot.date)
                    .await?;
                assignment
            }
        };

        info!(
            invite_id = %invite.id,
            slot_id = %slot.id,
            user_id = %user_id,
            "Invite accepted"
        );

        Ok(AcceptInviteResponse {
            invite: InviteResponse::from(invite),
            assignment: AssignmentResponse::from(assignment),
        })
    }

    // ========================================================================
    // Self-assign
    // ========================================================================

    /// Enroll a member on a slot directly.
    ///
    /// `assigned_by` records who performed the enrollment (an admin placing
    /// the member, or the member themselves in free mode) and defaults to the
    /// member.
    #[instrument(skip(self))]
    pub async fn self_assign(
        &self,
        slot_id: Snowflake,
        user_id: Snowflake,
        assigned_by: Option<Snowflake>,
    ) -> ServiceResult<AssignmentResponse> {
        let slot = self.resolve_slot(slot_id).await?;

        let _guard = self.ctx.member_locks().acquire(user_id).await;

        self.ensure_no_conflict(user_id, slot.date, Some(slot.id))
            .await?;

        // Double-enrollment on the same slot is rejected, not silently
        // accepted; it is a distinct failure from a same-day conflict.
        if self.ctx.assignment_repo().find(slot.id, user_id).await?.is_some() {
            return Err(DomainError::AlreadyAssigned.into());
        }

        self.ensure_capacity(&slot).await?;

        let assignment = Assignment::new(
            self.ctx.generate_id(),
            slot.id,
            user_id,
            assigned_by.unwrap_or(user_id),
        );
        self.ctx
            .assignment_repo()
            .create(&assignment, slot.date)
            .await?;

        info!(
            slot_id = %slot.id,
            user_id = %user_id,
            assigned_by = %assignment.assigned_by,
            "Member assigned"
        );

        Ok(AssignmentResponse::from(assignment))
    }

    // ========================================================================
    // Invitation lifecycle
    // ========================================================================

    /// Decline a pending invitation. Never conflict-checked: declining cannot
    /// create a conflict.
    #[instrument(skip(self))]
    pub async fn decline_invite(&self, invite_id: Snowflake) -> ServiceResult<InviteResponse> {
        let mut invite = self
            .ctx
            .invite_repo()
            .find_by_id(invite_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Invite", invite_id.to_string()))?;

        if !invite.can_decline() {
            return Err(DomainError::InviteAlreadyResponded(invite.status).into());
        }

        self.ctx.invite_repo().mark_declined(invite.id).await?;
        invite.mark_declined();

        info!(invite_id = %invite.id, slot_id = %invite.slot_id, "Invite declined");

        Ok(InviteResponse::from(invite))
    }

    /// Hard-delete an invitation, from any state (admin retraction)
    #[instrument(skip(self))]
    pub async fn delete_invite(&self, invite_id: Snowflake) -> ServiceResult<()> {
        let invite = self
            .ctx
            .invite_repo()
            .find_by_id(invite_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Invite", invite_id.to_string()))?;

        self.ctx.invite_repo().delete(invite.id).await?;

        info!(invite_id = %invite.id, slot_id = %invite.slot_id, "Invite deleted");

        Ok(())
    }

    // ========================================================================
    // Unassignment
    // ========================================================================

    /// Remove a member's confirmed assignment. Unconditional: removal can
    /// never violate the one-per-day invariant, so no conflict check runs.
    #[instrument(skip(self))]
    pub async fn unassign(&self, slot_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        self.ctx.assignment_repo().delete(slot_id, user_id).await?;

        info!(slot_id = %slot_id, user_id = %user_id, "Member unassigned");

        Ok(())
    }

    // ========================================================================
    // Listings
    // ========================================================================

    /// List invites for a slot
    #[instrument(skip(self))]
    pub async fn invites_for_slot(&self, slot_id: Snowflake) -> ServiceResult<Vec<InviteResponse>> {
        let slot = self.resolve_slot(slot_id).await?;
        let invites = self.ctx.invite_repo().find_by_slot(slot.id).await?;
        Ok(invites.into_iter().map(InviteResponse::from).collect())
    }

    /// List confirmed assignments for a slot
    #[instrument(skip(self))]
    pub async fn assignments_for_slot(
        &self,
        slot_id: Snowflake,
    ) -> ServiceResult<Vec<AssignmentResponse>> {
        let slot = self.resolve_slot(slot_id).await?;
        let assignments = self.ctx.assignment_repo().find_by_slot(slot.id).await?;
        Ok(assignments.into_iter().map(AssignmentResponse::from).collect())
    }

    // ========================================================================
    // Advisory probes (read-only, never authoritative)
    // ========================================================================

    /// Probe a member's calendar date directly
    #[instrument(skip(self))]
    pub async fn probe_conflict(
        &self,
        user_id: Snowflake,
        target_date: NaiveDate,
        exclude_slot: Option<Snowflake>,
    ) -> ServiceResult<ConflictProbeResponse> {
        let conflict = self.check_conflict(user_id, target_date, exclude_slot).await?;
        Ok(ConflictProbeResponse::from(conflict))
    }

    /// Probe a member against a slot's date
    #[instrument(skip(self))]
    pub async fn probe_conflict_by_slot(
        &self,
        user_id: Snowflake,
        slot_id: Snowflake,
    ) -> ServiceResult<ConflictProbeResponse> {
        let slot = self.resolve_slot(slot_id).await?;
        self.probe_conflict(user_id, slot.date, Some(slot.id)).await
    }

    /// Probe an email against a slot's date. Unresolved emails cannot
    /// conflict: they hold no assignments.
    #[instrument(skip(self))]
    pub async fn probe_conflict_by_email(
        &self,
        email: &str,
        slot_id: Snowflake,
    ) -> ServiceResult<ConflictProbeResponse> {
        let slot = self.resolve_slot(slot_id).await?;

        match self.ctx.user_repo().find_by_email(&normalize_email(email)).await? {
            Some(member) => self.probe_conflict(member.id, slot.date, Some(slot.id)).await,
            None => Ok(ConflictProbeResponse::clear()),
        }
    }
}

//! Slot service
//!
//! CRUD over slots plus listings with the advisory confirmed count. The one
//! scheduling-sensitive rule here: a slot's date cannot change while it has
//! confirmed assignments, because existing assignments are never re-validated
//! against an edited date.

use escala_core::entities::Slot;
use escala_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateSlotRequest, SlotResponse, SlotWithCountResponse, UpdateSlotRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Slot service
pub struct SlotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SlotService<'a> {
    /// Create a new SlotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a slot inside a ministry
    #[instrument(skip(self, request))]
    pub async fn create_slot(
        &self,
        ministry_id: Snowflake,
        request: CreateSlotRequest,
    ) -> ServiceResult<SlotResponse> {
        let ministry = self
            .ctx
            .ministry_repo()
            .find_by_id(ministry_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Ministry", ministry_id.to_string()))?;

        if request.end_time <= request.start_time {
            return Err(ServiceError::validation("end_time must be after start_time"));
        }

        let mut slot = Slot::new(
            self.ctx.generate_id(),
            ministry.id,
            request.title,
            request.date,
            request.start_time,
            request.end_time,
            request.mode,
            request.capacity,
        );
        slot.description = request.description;

        self.ctx.slot_repo().create(&slot).await?;

        info!(slot_id = %slot.id, ministry_id = %ministry.id, "Slot created");

        Ok(SlotResponse::from(slot))
    }

    /// Get slot by ID, with its confirmed count
    #[instrument(skip(self))]
    pub async fn get_slot(&self, slot_id: Snowflake) -> ServiceResult<SlotWithCountResponse> {
        let slot = self.resolve(slot_id).await?;
        let confirmed = self.ctx.assignment_repo().count_for_slot(slot.id).await?;
        Ok(SlotWithCountResponse::new(slot, confirmed))
    }

    /// List a ministry's slots with confirmed counts
    #[instrument(skip(self))]
    pub async fn list_ministry_slots(
        &self,
        ministry_id: Snowflake,
    ) -> ServiceResult<Vec<SlotWithCountResponse>> {
        let ministry = self
            .ctx
            .ministry_repo()
            .find_by_id(ministry_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Ministry", ministry_id.to_string()))?;

        let slots = self.ctx.slot_repo().find_by_ministry(ministry.id).await?;

        let mut responses = Vec::with_capacity(slots.len());
        for slot in slots {
            let confirmed = self.ctx.assignment_repo().count_for_slot(slot.id).await?;
            responses.push(SlotWithCountResponse::new(slot, confirmed));
        }

        Ok(responses)
    }

    /// Update a slot
    #[instrument(skip(self, request))]
    pub async fn update_slot(
        &self,
        slot_id: Snowflake,
        request: UpdateSlotRequest,
    ) -> ServiceResult<SlotResponse> {
        let mut slot = self.resolve(slot_id).await?;

        if let Some(date) = request.date {
            if date != slot.date {
                let confirmed = self.ctx.assignment_repo().count_for_slot(slot.id).await?;
                if confirmed > 0 {
                    return Err(ServiceError::validation(
                        "cannot change the date of a slot with confirmed assignments",
                    ));
                }
                slot.date = date;
            }
        }

        if let Some(title) = request.title {
            slot.title = title;
        }
        if let Some(description) = request.description {
            slot.description = Some(description);
        }
        if let Some(start_time) = request.start_time {
            slot.start_time = start_time;
        }
        if let Some(end_time) = request.end_time {
            slot.end_time = end_time;
        }
        if let Some(mode) = request.mode {
            slot.mode = mode;
        }
        if let Some(capacity) = request.capacity {
            slot.capacity = capacity;
        }

        if slot.end_time <= slot.start_time {
            return Err(ServiceError::validation("end_time must be after start_time"));
        }

        self.ctx.slot_repo().update(&slot).await?;

        info!(slot_id = %slot.id, "Slot updated");

        Ok(SlotResponse::from(slot))
    }

    /// Delete a slot
    #[instrument(skip(self))]
    pub async fn delete_slot(&self, slot_id: Snowflake) -> ServiceResult<()> {
        let slot = self.resolve(slot_id).await?;

        self.ctx.slot_repo().delete(slot.id).await?;

        info!(slot_id = %slot.id, "Slot deleted");

        Ok(())
    }

    async fn resolve(&self, slot_id: Snowflake) -> ServiceResult<Slot> {
        self.ctx
            .slot_repo()
            .find_by_id(slot_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Slot", slot_id.to_string()))
    }
}

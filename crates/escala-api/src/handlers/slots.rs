//! Slot handlers
//!
//! Slot CRUD and the per-slot invite/assignment roster views.

use axum::{
    extract::{Path, State},
    Json,
};
use escala_service::{
    AssignmentResponse, InviteResponse, ScheduleService, SlotResponse, SlotService,
    SlotWithCountResponse, UpdateSlotRequest,
};

use crate::extractors::{AuthUser, SlotIdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get slot with its confirmed count
///
/// GET /slots/{slot_id}
pub async fn get_slot(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<SlotIdPath>,
) -> ApiResult<Json<SlotWithCountResponse>> {
    let slot_id = path.slot_id()?;

    let service = SlotService::new(state.service_context());
    let response = service.get_slot(slot_id).await?;
    Ok(Json(response))
}

/// Update slot (admin)
///
/// PATCH /slots/{slot_id}
pub async fn update_slot(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<SlotIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateSlotRequest>,
) -> ApiResult<Json<SlotResponse>> {
    auth.require_admin()?;
    let slot_id = path.slot_id()?;

    let service = SlotService::new(state.service_context());
    let response = service.update_slot(slot_id, request).await?;
    Ok(Json(response))
}

/// Delete slot (admin)
///
/// DELETE /slots/{slot_id}
pub async fn delete_slot(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<SlotIdPath>,
) -> ApiResult<NoContent> {
    auth.require_admin()?;
    let slot_id = path.slot_id()?;

    let service = SlotService::new(state.service_context());
    service.delete_slot(slot_id).await?;
    Ok(NoContent)
}

/// List a slot's invites
///
/// GET /slots/{slot_id}/invites
pub async fn get_slot_invites(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<SlotIdPath>,
) -> ApiResult<Json<Vec<InviteResponse>>> {
    let slot_id = path.slot_id()?;

    let service = ScheduleService::new(state.service_context());
    let invites = service.invites_for_slot(slot_id).await?;
    Ok(Json(invites))
}

/// List a slot's confirmed assignments
///
/// GET /slots/{slot_id}/assignments
pub async fn get_slot_assignments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<SlotIdPath>,
) -> ApiResult<Json<Vec<AssignmentResponse>>> {
    let slot_id = path.slot_id()?;

    let service = ScheduleService::new(state.service_context());
    let assignments = service.assignments_for_slot(slot_id).await?;
    Ok(Json(assignments))
}

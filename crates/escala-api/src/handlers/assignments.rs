//! Assignment handlers
//!
//! Unassignment only: creation is conflict-gated and lives on the schedule
//! action endpoint. Removal is unconditional and never conflict-checked.

use axum::extract::{Path, State};
use escala_service::ScheduleService;

use crate::extractors::{AuthUser, SlotUserPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Remove a member from a slot (self or admin)
///
/// DELETE /slots/{slot_id}/assignments/{user_id}
pub async fn unassign(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<SlotUserPath>,
) -> ApiResult<NoContent> {
    let slot_id = path.slot_id()?;
    let user_id = path.user_id()?;

    auth.require_self_or_admin(user_id)?;

    let service = ScheduleService::new(state.service_context());
    service.unassign(slot_id, user_id).await?;
    Ok(NoContent)
}

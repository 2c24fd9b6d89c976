//! Invite lifecycle handlers
//!
//! Declining and retracting invitations. Creation and acceptance are
//! conflict-gated and live on the schedule action endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use escala_service::{InviteResponse, ScheduleService};

use crate::extractors::{AuthUser, InviteIdPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Decline a pending invite
///
/// POST /invites/{invite_id}/decline
pub async fn decline_invite(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<InviteIdPath>,
) -> ApiResult<Json<InviteResponse>> {
    let invite_id = path.invite_id()?;

    let service = ScheduleService::new(state.service_context());
    let response = service.decline_invite(invite_id).await?;
    Ok(Json(response))
}

/// Retract an invite from any state (admin)
///
/// DELETE /invites/{invite_id}
pub async fn delete_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<InviteIdPath>,
) -> ApiResult<NoContent> {
    auth.require_admin()?;
    let invite_id = path.invite_id()?;

    let service = ScheduleService::new(state.service_context());
    service.delete_invite(invite_id).await?;
    Ok(NoContent)
}

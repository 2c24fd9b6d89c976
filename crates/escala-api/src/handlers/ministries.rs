//! Ministry handlers
//!
//! Admin CRUD over ministries plus nested slot creation and listing.

use axum::{
    extract::{Path, State},
    Json,
};
use escala_service::{
    CreateMinistryRequest, CreateSlotRequest, MinistryResponse, MinistryService, SlotResponse,
    SlotService, SlotWithCountResponse, UpdateMinistryRequest,
};

use crate::extractors::{AuthUser, MinistryIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create ministry (admin)
///
/// POST /ministries
pub async fn create_ministry(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMinistryRequest>,
) -> ApiResult<Created<Json<MinistryResponse>>> {
    auth.require_admin()?;

    let service = MinistryService::new(state.service_context());
    let response = service.create_ministry(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List ministries
///
/// GET /ministries
pub async fn list_ministries(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<MinistryResponse>>> {
    let service = MinistryService::new(state.service_context());
    let ministries = service.list_ministries().await?;
    Ok(Json(ministries))
}

/// Get ministry
///
/// GET /ministries/{ministry_id}
pub async fn get_ministry(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<MinistryIdPath>,
) -> ApiResult<Json<MinistryResponse>> {
    let ministry_id = path.ministry_id()?;

    let service = MinistryService::new(state.service_context());
    let response = service.get_ministry(ministry_id).await?;
    Ok(Json(response))
}

/// Update ministry (admin)
///
/// PATCH /ministries/{ministry_id}
pub async fn update_ministry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<MinistryIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateMinistryRequest>,
) -> ApiResult<Json<MinistryResponse>> {
    auth.require_admin()?;
    let ministry_id = path.ministry_id()?;

    let service = MinistryService::new(state.service_context());
    let response = service.update_ministry(ministry_id, request).await?;
    Ok(Json(response))
}

/// Delete ministry and its slots (admin)
///
/// DELETE /ministries/{ministry_id}
pub async fn delete_ministry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<MinistryIdPath>,
) -> ApiResult<NoContent> {
    auth.require_admin()?;
    let ministry_id = path.ministry_id()?;

    let service = MinistryService::new(state.service_context());
    service.delete_ministry(ministry_id).await?;
    Ok(NoContent)
}

/// List a ministry's slots with confirmed counts
///
/// GET /ministries/{ministry_id}/slots
pub async fn list_ministry_slots(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<MinistryIdPath>,
) -> ApiResult<Json<Vec<SlotWithCountResponse>>> {
    let ministry_id = path.ministry_id()?;

    let service = SlotService::new(state.service_context());
    let slots = service.list_ministry_slots(ministry_id).await?;
    Ok(Json(slots))
}

/// Create a slot inside a ministry (admin)
///
/// POST /ministries/{ministry_id}/slots
pub async fn create_slot(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<MinistryIdPath>,
    ValidatedJson(request): ValidatedJson<CreateSlotRequest>,
) -> ApiResult<Created<Json<SlotResponse>>> {
    auth.require_admin()?;
    let ministry_id = path.ministry_id()?;

    let service = SlotService::new(state.service_context());
    let response = service.create_slot(ministry_id, request).await?;
    Ok(Created(Json(response)))
}

//! Schedule action handlers
//!
//! The conflict-gated core is exposed as a single action endpoint taking a
//! tagged request body, dispatched by pattern matching. Responses use the
//! success/failure envelope; same-day conflicts answer 409 with the
//! structured `conflict` payload so callers can present the blocking slot,
//! while other failures of the family answer 409 without one.
//!
//! The probe endpoint mirrors the same date-overlap computation read-only,
//! for advisory UI use. It is not atomic with any mutation and must never be
//! treated as authoritative.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use escala_core::{SameDayConflict, Snowflake};
use escala_service::{ConflictProbeResponse, ScheduleAction, ScheduleService, ServiceError};
use serde::{Deserialize, Serialize};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Action envelope
// ============================================================================

/// Success envelope for action responses
#[derive(Debug, Serialize)]
pub struct ActionSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ActionSuccess<T> {
    fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope for action responses. `conflict` is present only for
/// same-day schedule conflicts.
#[derive(Debug, Serialize)]
pub struct ActionFailureBody {
    pub success: bool,
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<SameDayConflict>,
}

/// Wrapper turning a ServiceError into the action failure envelope
pub struct ActionFailure(pub ServiceError);

impl IntoResponse for ActionFailure {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ActionFailureBody {
            success: false,
            error: self.0.to_string(),
            code: self.0.error_code().to_string(),
            conflict: self.0.schedule_conflict().cloned(),
        };

        (status, Json(body)).into_response()
    }
}

type ActionResult = Result<Response, ActionFailure>;

fn success<T: Serialize>(data: T) -> Response {
    Json(ActionSuccess::new(data)).into_response()
}

// ============================================================================
// Action endpoint
// ============================================================================

/// Execute a schedule action
///
/// POST /schedule/actions
pub async fn schedule_action(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(action): Json<ScheduleAction>,
) -> ApiResult<ActionResult> {
    // Authorization gates are per-intent; the engine itself is role-agnostic
    match &action {
        ScheduleAction::CreateInvite { .. } => auth.require_admin()?,
        ScheduleAction::AcceptInvite { user_id, .. } => auth.require_self_or_admin(*user_id)?,
        ScheduleAction::SelfAssign { user_id, .. } => auth.require_self_or_admin(*user_id)?,
    }

    let service = ScheduleService::new(state.service_context());

    let result = match action {
        ScheduleAction::CreateInvite { slot_id, email } => service
            .create_invite(slot_id, &email)
            .await
            .map(success),
        ScheduleAction::AcceptInvite { invite_id, user_id } => service
            .accept_invite(invite_id, user_id)
            .await
            .map(success),
        ScheduleAction::SelfAssign {
            slot_id,
            user_id,
            assigned_by,
        } => service
            .self_assign(slot_id, user_id, assigned_by)
            .await
            .map(success),
    };

    Ok(result.map_err(ActionFailure))
}

// ============================================================================
// Advisory conflict probe
// ============================================================================

/// Query parameters for the conflict probe. Three addressing forms are
/// accepted: user_id+date, user_id+slot_id, or email+slot_id.
#[derive(Debug, Deserialize)]
pub struct ConflictProbeQuery {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub slot_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub exclude_slot_id: Option<String>,
}

fn parse_id(raw: &str, name: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_query(format!("Invalid {name} format")))
}

/// Probe for a same-day conflict (advisory, read-only)
///
/// GET /schedule/conflicts
pub async fn probe_conflict(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ConflictProbeQuery>,
) -> ApiResult<Json<ConflictProbeResponse>> {
    let service = ScheduleService::new(state.service_context());

    let response = match (&query.user_id, &query.email, &query.slot_id, query.date) {
        (_, Some(email), Some(slot_id), _) => {
            let slot_id = parse_id(slot_id, "slot_id")?;
            service.probe_conflict_by_email(email, slot_id).await?
        }
        (Some(user_id), None, Some(slot_id), _) => {
            let user_id = parse_id(user_id, "user_id")?;
            let slot_id = parse_id(slot_id, "slot_id")?;
            service.probe_conflict_by_slot(user_id, slot_id).await?
        }
        (Some(user_id), None, None, Some(date)) => {
            let user_id = parse_id(user_id, "user_id")?;
            let exclude = match &query.exclude_slot_id {
                Some(raw) => Some(parse_id(raw, "exclude_slot_id")?),
                None => None,
            };
            service.probe_conflict(user_id, date, exclude).await?
        }
        _ => {
            return Err(ApiError::invalid_query(
                "expected user_id+date, user_id+slot_id, or email+slot_id",
            ))
        }
    };

    Ok(Json(response))
}

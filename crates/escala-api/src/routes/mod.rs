//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{assignments, health, invites, ministries, schedule, slots};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(schedule_routes())
        .merge(ministry_routes())
        .merge(slot_routes())
        .merge(invite_routes())
}

/// Schedule engine routes
fn schedule_routes() -> Router<AppState> {
    Router::new()
        // The single conflict-gated action endpoint
        .route("/schedule/actions", post(schedule::schedule_action))
        // Advisory read-only probe
        .route("/schedule/conflicts", get(schedule::probe_conflict))
}

/// Ministry routes
fn ministry_routes() -> Router<AppState> {
    Router::new()
        // Ministry CRUD
        .route("/ministries", post(ministries::create_ministry))
        .route("/ministries", get(ministries::list_ministries))
        .route("/ministries/:ministry_id", get(ministries::get_ministry))
        .route("/ministries/:ministry_id", patch(ministries::update_ministry))
        .route("/ministries/:ministry_id", delete(ministries::delete_ministry))
        // Ministry slots
        .route("/ministries/:ministry_id/slots", get(ministries::list_ministry_slots))
        .route("/ministries/:ministry_id/slots", post(ministries::create_slot))
}

/// Slot routes
fn slot_routes() -> Router<AppState> {
    Router::new()
        // Slot CRUD
        .route("/slots/:slot_id", get(slots::get_slot))
        .route("/slots/:slot_id", patch(slots::update_slot))
        .route("/slots/:slot_id", delete(slots::delete_slot))
        // Roster views
        .route("/slots/:slot_id/invites", get(slots::get_slot_invites))
        .route("/slots/:slot_id/assignments", get(slots::get_slot_assignments))
        // Unassignment (unconditional removal)
        .route(
            "/slots/:slot_id/assignments/:user_id",
            delete(assignments::unassign),
        )
}

/// Invite lifecycle routes
fn invite_routes() -> Router<AppState> {
    Router::new()
        .route("/invites/:invite_id/decline", post(invites::decline_invite))
        .route("/invites/:invite_id", delete(invites::delete_invite))
}

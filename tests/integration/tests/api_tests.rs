//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (migrations are applied on startup)
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::NaiveDate;
use escala_core::Role;
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

fn test_date(offset_days: u64) -> NaiveDate {
    // Far-future dates keep runs from colliding with one another
    NaiveDate::from_ymd_opt(2033, 1, 1)
        .unwrap()
        .checked_add_days(chrono::Days::new(offset_days + unique_suffix() * 3))
        .unwrap()
}

/// Create a ministry with one slot, returning (ministry, slot)
async fn setup_slot(
    server: &TestServer,
    admin_token: &str,
    date: NaiveDate,
    capacity: i32,
) -> (MinistryBody, SlotBody) {
    let ministry: MinistryBody = assert_json(
        server
            .post_auth("/api/v1/ministries", admin_token, &CreateMinistry::unique(date))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let slot: SlotBody = assert_json(
        server
            .post_auth(
                &format!("/api/v1/ministries/{}/slots", ministry.id),
                admin_token,
                &CreateSlot::unique(date, capacity),
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    (ministry, slot)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Authorization Tests
// ============================================================================

#[tokio::test]
async fn test_ministry_creation_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let member = server.seed_identity(Role::Member).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/ministries",
            &member.token,
            &CreateMinistry::unique(test_date(0)),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_requests_without_token_are_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/ministries").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Schedule Action Tests
// ============================================================================

#[tokio::test]
async fn test_invite_accept_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.seed_identity(Role::Admin).await.unwrap();
    let member = server.seed_identity(Role::Member).await.unwrap();

    let (_ministry, slot) = setup_slot(&server, &admin.token, test_date(0), 2).await;

    // Admin invites the member
    let invited: ActionSuccess<InviteBody> = assert_json(
        server
            .post_auth(
                "/api/v1/schedule/actions",
                &admin.token,
                &create_invite_action(&slot.id, &member.email),
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(invited.success);
    assert_eq!(invited.data.status, "pending");

    // Member accepts
    let accepted: ActionSuccess<AcceptBody> = assert_json(
        server
            .post_auth(
                "/api/v1/schedule/actions",
                &member.token,
                &accept_invite_action(&invited.data.id, &member.user_id.to_string()),
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(accepted.data.invite.status, "accepted");
    assert_eq!(accepted.data.assignment.slot_id, slot.id);

    // The roster shows one confirmed assignment
    let roster: Vec<AssignmentBody> = assert_json(
        server
            .get_auth(&format!("/api/v1/slots/{}/assignments", slot.id), &member.token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(roster.len(), 1);
}

#[tokio::test]
async fn test_second_same_day_accept_conflicts_with_409() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.seed_identity(Role::Admin).await.unwrap();
    let member = server.seed_identity(Role::Member).await.unwrap();

    let date = test_date(1);
    let (_m1, slot_a) = setup_slot(&server, &admin.token, date, 2).await;
    let (_m2, slot_b) = setup_slot(&server, &admin.token, date, 2).await;

    // Two pending invites on the same day are both accepted at creation time
    let invite_a: ActionSuccess<InviteBody> = assert_json(
        server
            .post_auth(
                "/api/v1/schedule/actions",
                &admin.token,
                &create_invite_action(&slot_a.id, &member.email),
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let invite_b: ActionSuccess<InviteBody> = assert_json(
        server
            .post_auth(
                "/api/v1/schedule/actions",
                &admin.token,
                &create_invite_action(&slot_b.id, &member.email),
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    // First accept wins
    let user_id = member.user_id.to_string();
    assert_status(
        server
            .post_auth(
                "/api/v1/schedule/actions",
                &member.token,
                &accept_invite_action(&invite_a.data.id, &user_id),
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    // The second answers 409 with the structured conflict naming slot A
    let failure: ActionFailure = assert_json(
        server
            .post_auth(
                "/api/v1/schedule/actions",
                &member.token,
                &accept_invite_action(&invite_b.data.id, &user_id),
            )
            .await
            .unwrap(),
        StatusCode::CONFLICT,
    )
    .await
    .unwrap();
    assert!(!failure.success);
    assert_eq!(failure.code, "SCHEDULE_CONFLICT");
    let conflict = failure.conflict.expect("conflict payload");
    assert_eq!(conflict.conflicting_slot.id, slot_a.id);

    // The losing invite is still pending
    let invites: Vec<InviteBody> = assert_json(
        server
            .get_auth(&format!("/api/v1/slots/{}/invites", slot_b.id), &admin.token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(invites[0].status, "pending");
}

#[tokio::test]
async fn test_self_assign_and_duplicate_rejection() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.seed_identity(Role::Admin).await.unwrap();
    let member = server.seed_identity(Role::Member).await.unwrap();

    let (_ministry, slot) = setup_slot(&server, &admin.token, test_date(2), 3).await;
    let user_id = member.user_id.to_string();

    // First enrollment succeeds
    assert_status(
        server
            .post_auth(
                "/api/v1/schedule/actions",
                &member.token,
                &self_assign_action(&slot.id, &user_id),
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    // The second is a duplicate, not a day conflict
    let failure: ActionFailure = assert_json(
        server
            .post_auth(
                "/api/v1/schedule/actions",
                &member.token,
                &self_assign_action(&slot.id, &user_id),
            )
            .await
            .unwrap(),
        StatusCode::CONFLICT,
    )
    .await
    .unwrap();
    assert_eq!(failure.code, "ALREADY_ASSIGNED");
    assert!(failure.conflict.is_none());
}

#[tokio::test]
async fn test_unassign_frees_the_day() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.seed_identity(Role::Admin).await.unwrap();
    let member = server.seed_identity(Role::Member).await.unwrap();

    let date = test_date(3);
    let (_m1, slot_a) = setup_slot(&server, &admin.token, date, 2).await;
    let (_m2, slot_b) = setup_slot(&server, &admin.token, date, 2).await;
    let user_id = member.user_id.to_string();

    assert_status(
        server
            .post_auth(
                "/api/v1/schedule/actions",
                &member.token,
                &self_assign_action(&slot_a.id, &user_id),
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    // Unassignment is unconditional
    assert_status(
        server
            .delete_auth(
                &format!("/api/v1/slots/{}/assignments/{}", slot_a.id, user_id),
                &member.token,
            )
            .await
            .unwrap(),
        StatusCode::NO_CONTENT,
    )
    .await
    .unwrap();

    // The day is free again
    assert_status(
        server
            .post_auth(
                "/api/v1/schedule/actions",
                &member.token,
                &self_assign_action(&slot_b.id, &user_id),
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
}

// ============================================================================
// Advisory Probe Tests
// ============================================================================

#[tokio::test]
async fn test_conflict_probe_reflects_assignments() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.seed_identity(Role::Admin).await.unwrap();
    let member = server.seed_identity(Role::Member).await.unwrap();

    let date = test_date(4);
    let (_m1, slot_a) = setup_slot(&server, &admin.token, date, 2).await;
    let (_m2, slot_b) = setup_slot(&server, &admin.token, date, 2).await;
    let user_id = member.user_id.to_string();

    let clear: ProbeBody = assert_json(
        server
            .get_auth(
                &format!("/api/v1/schedule/conflicts?user_id={}&slot_id={}", user_id, slot_b.id),
                &member.token,
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!clear.has_conflict);

    assert_status(
        server
            .post_auth(
                "/api/v1/schedule/actions",
                &member.token,
                &self_assign_action(&slot_a.id, &user_id),
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let hit: ProbeBody = assert_json(
        server
            .get_auth(
                &format!("/api/v1/schedule/conflicts?user_id={}&slot_id={}", user_id, slot_b.id),
                &member.token,
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(hit.has_conflict);
    assert!(hit.message.is_some());
}

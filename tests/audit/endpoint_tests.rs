use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
};
use bucket_warden::{
    audit::{
        domain::{
            model::enums::{audit_action::AuditAction, audit_outcome::AuditOutcome},
            services::audit_record_command_service::AuditRecordCommandService,
        },
        interfaces::rest::{
            controllers::audit_rest_controller::{
                audit_health, list_my_audit_records, search_audit_records, user_activity_stats,
            },
            resources::audit_query_resource::{
                AuditLimitQueryResource, SearchAuditRecordsQueryResource,
                UserActivityStatsQueryResource,
            },
        },
    },
    shared::interfaces::rest::request_actor::{ACTOR_ADMIN_HEADER, ACTOR_ID_HEADER},
};
use chrono::Utc;

use crate::support::{
    ADMIN_ID, BUCKET, USER_A_ID, USER_B_ID, create_controller_state,
    fakes::FakeAuditRecordRepository, record_command, stored_record,
};

fn headers_for(user_id: &str, is_administrator: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACTOR_ID_HEADER,
        HeaderValue::from_str(user_id).expect("valid actor header"),
    );
    if is_administrator {
        headers.insert(ACTOR_ADMIN_HEADER, HeaderValue::from_static("true"));
    }
    headers
}

#[tokio::test]
async fn search_requires_actor_and_administrator() {
    let state = create_controller_state(Arc::new(FakeAuditRecordRepository::new()));

    let anonymous = search_audit_records(
        State(state.clone()),
        HeaderMap::new(),
        Query(SearchAuditRecordsQueryResource::default()),
    )
    .await;
    let member = search_audit_records(
        State(state),
        headers_for(USER_A_ID, false),
        Query(SearchAuditRecordsQueryResource::default()),
    )
    .await;

    assert!(matches!(anonymous, Err((StatusCode::UNAUTHORIZED, _))));
    assert!(matches!(member, Err((StatusCode::FORBIDDEN, _))));
}

#[tokio::test]
async fn unknown_action_filter_is_a_bad_request() {
    let state = create_controller_state(Arc::new(FakeAuditRecordRepository::new()));

    let result = search_audit_records(
        State(state),
        headers_for(ADMIN_ID, true),
        Query(SearchAuditRecordsQueryResource {
            action: Some("rename".to_string()),
            ..SearchAuditRecordsQueryResource::default()
        }),
    )
    .await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
}

#[tokio::test]
async fn members_read_only_their_own_records() {
    let repository = Arc::new(FakeAuditRecordRepository::new());
    let now = Utc::now();
    repository.seed(vec![
        stored_record(USER_A_ID, AuditAction::Upload, BUCKET, AuditOutcome::Success, now),
        stored_record(USER_B_ID, AuditAction::Upload, BUCKET, AuditOutcome::Success, now),
    ]);
    let state = create_controller_state(repository);

    let Json(records) = list_my_audit_records(
        State(state),
        headers_for(USER_B_ID, false),
        Query(AuditLimitQueryResource::default()),
    )
    .await
    .expect("own records succeed");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].actor_user_id.to_string(), USER_B_ID);
    assert_eq!(records[0].action, "upload");
    assert_eq!(records[0].outcome, "success");
}

#[tokio::test]
async fn stats_window_out_of_range_is_a_bad_request() {
    let state = create_controller_state(Arc::new(FakeAuditRecordRepository::new()));

    let result = user_activity_stats(
        State(state),
        headers_for(ADMIN_ID, true),
        Path(USER_A_ID.to_string()),
        Query(UserActivityStatsQueryResource { days: Some(400) }),
    )
    .await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
}

#[tokio::test]
async fn ledger_outage_is_unavailable_and_health_degrades_after_failed_append() {
    let repository = Arc::new(FakeAuditRecordRepository::new());
    repository.set_failing(true);
    let state = create_controller_state(repository);

    let search = search_audit_records(
        State(state.clone()),
        headers_for(ADMIN_ID, true),
        Query(SearchAuditRecordsQueryResource::default()),
    )
    .await;
    assert!(matches!(search, Err((StatusCode::SERVICE_UNAVAILABLE, _))));

    let Json(healthy) = audit_health(State(state.clone())).await;
    assert_eq!(healthy.status, "ok");

    let _ = state
        .command_service
        .handle_record(record_command(USER_A_ID, "list", true))
        .await;

    let Json(degraded) = audit_health(State(state)).await;
    assert_eq!(degraded.status, "degraded");
    assert_eq!(degraded.failed_appends, 1);
}

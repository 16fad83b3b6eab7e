use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
};
use bucket_warden::{
    shared::interfaces::rest::request_actor::ACTOR_ID_HEADER,
    storage_gateway::interfaces::rest::{
        controllers::storage_gateway_rest_controller::{
            authorize_storage_operation, report_operation_outcome,
        },
        resources::{
            operation_outcome_resource::ReportOperationOutcomeRequestResource,
            storage_authorization_resource::AuthorizeStorageOperationRequestResource,
        },
    },
};

use crate::support::{BUCKET, USER_A_ID, create_harness, rights};

fn member_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACTOR_ID_HEADER, HeaderValue::from_static(USER_A_ID));
    headers.insert("x-forwarded-for", HeaderValue::from_static("192.0.2.10"));
    headers
}

fn authorize_request(operation: &str, key: &str) -> AuthorizeStorageOperationRequestResource {
    AuthorizeStorageOperationRequestResource {
        operation: operation.to_string(),
        bucket_name: BUCKET.to_string(),
        object_key: key.to_string(),
    }
}

#[tokio::test]
async fn partial_listing_is_returned_as_ok_with_entries() {
    let harness = create_harness();
    harness
        .issue_grant(USER_A_ID, "docs/internal/", rights(true, false, false, true))
        .await;

    let Json(authorization) = authorize_storage_operation(
        State(harness.controller_state()),
        member_headers(),
        Json(authorize_request("list", "")),
    )
    .await
    .expect("partial listing");

    assert_eq!(authorization.decision, "partial_listing");
    assert_eq!(authorization.entries.len(), 1);
    assert_eq!(authorization.entries[0].key, "docs/");

    let records = harness.all_records().await;
    assert_eq!(records[0].source_address(), "192.0.2.10");
}

#[tokio::test]
async fn denial_maps_to_forbidden_and_unknown_operation_to_bad_request() {
    let harness = create_harness();

    let denied = authorize_storage_operation(
        State(harness.controller_state()),
        member_headers(),
        Json(authorize_request("download", "docs/plan.md")),
    )
    .await;
    let unknown = authorize_storage_operation(
        State(harness.controller_state()),
        member_headers(),
        Json(authorize_request("rename", "docs/plan.md")),
    )
    .await;

    let Err((status, Json(error))) = denied else {
        panic!("download without grants must be denied");
    };
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error.code, "permission_denied");
    assert!(matches!(unknown, Err((StatusCode::BAD_REQUEST, _))));
}

#[tokio::test]
async fn outcome_report_is_created_and_rejects_success_with_error() {
    let harness = create_harness();
    let request = ReportOperationOutcomeRequestResource {
        operation: "download".to_string(),
        bucket_name: BUCKET.to_string(),
        object_key: "docs/plan.md".to_string(),
        succeeded: true,
        error_detail: None,
        context_metadata: None,
    };

    let (status, Json(receipt)) = report_operation_outcome(
        State(harness.controller_state()),
        member_headers(),
        Json(request.clone()),
    )
    .await
    .expect("outcome recorded");
    let contradictory = report_operation_outcome(
        State(harness.controller_state()),
        member_headers(),
        Json(ReportOperationOutcomeRequestResource {
            error_detail: Some("timeout".to_string()),
            ..request
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(harness.all_records().await[0].id().value(), receipt.record_id);
    assert!(matches!(contradictory, Err((StatusCode::BAD_REQUEST, _))));
}

#[tokio::test]
async fn missing_actor_is_unauthorized() {
    let harness = create_harness();

    let result = authorize_storage_operation(
        State(harness.controller_state()),
        HeaderMap::new(),
        Json(authorize_request("list", "")),
    )
    .await;

    assert!(matches!(result, Err((StatusCode::UNAUTHORIZED, _))));
}

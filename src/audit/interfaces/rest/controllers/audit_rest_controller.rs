use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};

use crate::{
    audit::{
        domain::{
            model::{
                enums::audit_domain_error::AuditDomainError,
                queries::{
                    search_audit_records_query::{
                        SearchAuditRecordsQuery, SearchAuditRecordsQueryParts,
                    },
                    user_activity_stats_query::UserActivityStatsQuery,
                },
                value_objects::audit_requester::AuditRequester,
            },
            services::{
                audit_record_command_service::AuditRecordCommandService,
                audit_record_query_service::AuditRecordQueryService,
            },
        },
        interfaces::rest::resources::{
            audit_error_response_resource::AuditErrorResponseResource,
            audit_query_resource::{
                AuditLimitQueryResource, SearchAuditRecordsQueryResource,
                UserActivityStatsQueryResource,
            },
            audit_record_resource::{
                AuditHealthResource, AuditRecordPageResource, AuditRecordResource,
                UserActivityStatsResource,
            },
        },
    },
    shared::interfaces::rest::request_actor::RequestActor,
};

type ErrorResponse = (StatusCode, Json<AuditErrorResponseResource>);

#[derive(Clone)]
pub struct AuditRestControllerState {
    pub command_service: Arc<dyn AuditRecordCommandService>,
    pub query_service: Arc<dyn AuditRecordQueryService>,
}

pub fn router(state: AuditRestControllerState) -> Router {
    Router::new()
        .route("/audit/records", get(search_audit_records))
        .route("/audit/records/mine", get(list_my_audit_records))
        .route("/audit/records/recent", get(list_recent_audit_records))
        .route(
            "/audit/buckets/:bucket_name/records",
            get(list_bucket_audit_records),
        )
        .route("/audit/users/:user_id/stats", get(user_activity_stats))
        .route("/audit/health", get(audit_health))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/audit/records",
    tag = "audit",
    params(SearchAuditRecordsQueryResource),
    security(("actorId" = []), ("actorAdmin" = [])),
    responses(
        (status = 200, description = "Matching audit records, newest first", body = AuditRecordPageResource),
        (status = 400, description = "Invalid filter", body = AuditErrorResponseResource),
        (status = 403, description = "Administrator required", body = AuditErrorResponseResource),
        (status = 503, description = "Ledger unavailable", body = AuditErrorResponseResource)
    )
)]
pub async fn search_audit_records(
    State(state): State<AuditRestControllerState>,
    headers: HeaderMap,
    Query(query): Query<SearchAuditRecordsQueryResource>,
) -> Result<Json<AuditRecordPageResource>, ErrorResponse> {
    let requester = parse_requester(&headers)?;

    let query = SearchAuditRecordsQuery::new(SearchAuditRecordsQueryParts {
        requested_by: requester,
        actor_user_id: query.actor_user_id,
        bucket_name: query.bucket_name,
        action_name: query.action,
        outcome_name: query.outcome,
        skip: query.skip,
        limit: query.limit,
    })
    .map_err(map_domain_error)?;

    let page = state
        .query_service
        .handle_search(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(AuditRecordPageResource::from(page)))
}

#[utoipa::path(
    get,
    path = "/audit/records/mine",
    tag = "audit",
    params(AuditLimitQueryResource),
    security(("actorId" = [])),
    responses(
        (status = 200, description = "The caller's own activity, newest first", body = [AuditRecordResource]),
        (status = 401, description = "Missing actor", body = AuditErrorResponseResource)
    )
)]
pub async fn list_my_audit_records(
    State(state): State<AuditRestControllerState>,
    headers: HeaderMap,
    Query(query): Query<AuditLimitQueryResource>,
) -> Result<Json<Vec<AuditRecordResource>>, ErrorResponse> {
    let requester = parse_requester(&headers)?;

    let records = state
        .query_service
        .handle_own_activity(&requester, query.limit)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(records.iter().map(AuditRecordResource::from).collect()))
}

#[utoipa::path(
    get,
    path = "/audit/records/recent",
    tag = "audit",
    params(AuditLimitQueryResource),
    security(("actorId" = []), ("actorAdmin" = [])),
    responses(
        (status = 200, description = "Most recent records system-wide", body = [AuditRecordResource]),
        (status = 403, description = "Administrator required", body = AuditErrorResponseResource)
    )
)]
pub async fn list_recent_audit_records(
    State(state): State<AuditRestControllerState>,
    headers: HeaderMap,
    Query(query): Query<AuditLimitQueryResource>,
) -> Result<Json<Vec<AuditRecordResource>>, ErrorResponse> {
    let requester = parse_requester(&headers)?;

    let records = state
        .query_service
        .handle_recent(&requester, query.limit)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(records.iter().map(AuditRecordResource::from).collect()))
}

#[utoipa::path(
    get,
    path = "/audit/buckets/{bucket_name}/records",
    tag = "audit",
    params(
        ("bucket_name" = String, Path, description = "Bucket name"),
        AuditLimitQueryResource
    ),
    security(("actorId" = []), ("actorAdmin" = [])),
    responses(
        (status = 200, description = "Records for one bucket", body = [AuditRecordResource]),
        (status = 403, description = "Administrator required", body = AuditErrorResponseResource)
    )
)]
pub async fn list_bucket_audit_records(
    State(state): State<AuditRestControllerState>,
    headers: HeaderMap,
    Path(bucket_name): Path<String>,
    Query(query): Query<AuditLimitQueryResource>,
) -> Result<Json<Vec<AuditRecordResource>>, ErrorResponse> {
    let requester = parse_requester(&headers)?;

    let records = state
        .query_service
        .handle_bucket_activity(&requester, bucket_name, query.limit)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(records.iter().map(AuditRecordResource::from).collect()))
}

#[utoipa::path(
    get,
    path = "/audit/users/{user_id}/stats",
    tag = "audit",
    params(
        ("user_id" = String, Path, description = "User id"),
        UserActivityStatsQueryResource
    ),
    security(("actorId" = []), ("actorAdmin" = [])),
    responses(
        (status = 200, description = "Activity counters for the window", body = UserActivityStatsResource),
        (status = 400, description = "Invalid user id or window", body = AuditErrorResponseResource),
        (status = 403, description = "Administrator required", body = AuditErrorResponseResource)
    )
)]
pub async fn user_activity_stats(
    State(state): State<AuditRestControllerState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Query(query): Query<UserActivityStatsQueryResource>,
) -> Result<Json<UserActivityStatsResource>, ErrorResponse> {
    let requester = parse_requester(&headers)?;
    let query =
        UserActivityStatsQuery::new(requester, user_id, query.days).map_err(map_domain_error)?;

    let stats = state
        .query_service
        .handle_user_activity_stats(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(UserActivityStatsResource::from(stats)))
}

#[utoipa::path(
    get,
    path = "/audit/health",
    tag = "audit",
    responses(
        (status = 200, description = "Ledger write health", body = AuditHealthResource)
    )
)]
pub async fn audit_health(State(state): State<AuditRestControllerState>) -> Json<AuditHealthResource> {
    let failed_appends = state.command_service.failed_append_count();
    let status = if failed_appends == 0 { "ok" } else { "degraded" };

    Json(AuditHealthResource {
        status: status.to_string(),
        failed_appends,
    })
}

fn parse_requester(headers: &HeaderMap) -> Result<AuditRequester, ErrorResponse> {
    let actor = RequestActor::from_headers(headers).map_err(|error| {
        (
            StatusCode::UNAUTHORIZED,
            Json(AuditErrorResponseResource {
                code: "unauthenticated".to_string(),
                message: error.to_string(),
            }),
        )
    })?;

    Ok(AuditRequester::new(actor.user_id, actor.is_administrator))
}

fn map_domain_error(error: AuditDomainError) -> ErrorResponse {
    let (status, code) = match error {
        AuditDomainError::InvalidActorId
        | AuditDomainError::InvalidBucketName
        | AuditDomainError::UnknownAuditAction(_)
        | AuditDomainError::UnknownAuditOutcome(_)
        | AuditDomainError::InvalidActivityWindow { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_request")
        }
        AuditDomainError::AdministratorRequired => {
            (StatusCode::FORBIDDEN, "administrator_required")
        }
        AuditDomainError::LedgerUnavailable(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, "ledger_unavailable")
        }
    };

    (
        status,
        Json(AuditErrorResponseResource {
            code: code.to_string(),
            message: error.to_string(),
        }),
    )
}

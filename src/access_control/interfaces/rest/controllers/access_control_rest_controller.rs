use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post},
};
use validator::Validate;

use crate::{
    access_control::{
        domain::{
            model::{
                commands::{
                    create_access_grant_command::{
                        CreateAccessGrantCommand, CreateAccessGrantCommandParts,
                    },
                    delete_access_grant_command::DeleteAccessGrantCommand,
                    revoke_user_grants_command::RevokeUserGrantsCommand,
                    update_access_grant_command::{
                        UpdateAccessGrantCommand, UpdateAccessGrantCommandParts,
                    },
                },
                enums::access_control_domain_error::AccessControlDomainError,
                queries::{
                    expand_visible_prefixes_query::ExpandVisiblePrefixesQuery,
                    list_access_grants_query::ListAccessGrantsQuery,
                    resolve_access_query::{ResolveAccessQuery, ResolveAccessQueryParts},
                },
                value_objects::{access_subject::AccessSubject, user_id::UserId},
            },
            services::{
                access_grant_command_service::AccessGrantCommandService,
                access_grant_query_service::AccessGrantQueryService,
                permission_resolution_service::PermissionResolutionService,
            },
        },
        interfaces::rest::resources::{
            access_control_error_response_resource::AccessControlErrorResponseResource,
            access_grant_resource::{
                AccessGrantResource, GrantStatisticsResource, ListAccessGrantsQueryResource,
                RevokedGrantsResource,
            },
            create_access_grant_request_resource::CreateAccessGrantRequestResource,
            resolve_access_request_resource::{
                AccessDecisionResource, ExpandVisiblePrefixesRequestResource,
                ResolveAccessRequestResource, SyntheticDirectoryEntryResource,
            },
            update_access_grant_request_resource::UpdateAccessGrantRequestResource,
        },
    },
    shared::interfaces::rest::request_actor::RequestActor,
};

type ErrorResponse = (StatusCode, Json<AccessControlErrorResponseResource>);

#[derive(Clone)]
pub struct AccessControlRestControllerState {
    pub command_service: Arc<dyn AccessGrantCommandService>,
    pub query_service: Arc<dyn AccessGrantQueryService>,
    pub resolution_service: Arc<dyn PermissionResolutionService>,
}

pub fn router(state: AccessControlRestControllerState) -> Router {
    Router::new()
        .route(
            "/access-control/grants",
            post(create_access_grant).get(list_access_grants),
        )
        .route("/access-control/grants/mine", get(list_my_access_grants))
        .route("/access-control/grants/statistics", get(grant_statistics))
        .route(
            "/access-control/grants/:grant_id",
            patch(update_access_grant).delete(delete_access_grant),
        )
        .route(
            "/access-control/users/:user_id/grants",
            delete(revoke_user_grants),
        )
        .route("/access-control/decisions/resolve", post(resolve_access))
        .route("/access-control/decisions/expand", post(expand_visible_prefixes))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/access-control/grants",
    tag = "access-control",
    request_body = CreateAccessGrantRequestResource,
    security(("actorId" = []), ("actorAdmin" = [])),
    responses(
        (status = 201, description = "Grant created", body = AccessGrantResource),
        (status = 400, description = "Invalid request", body = AccessControlErrorResponseResource),
        (status = 401, description = "Missing actor", body = AccessControlErrorResponseResource),
        (status = 403, description = "Administrator required", body = AccessControlErrorResponseResource),
        (status = 503, description = "Grant store unavailable", body = AccessControlErrorResponseResource)
    )
)]
pub async fn create_access_grant(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<CreateAccessGrantRequestResource>,
) -> Result<(StatusCode, Json<AccessGrantResource>), ErrorResponse> {
    let subject = parse_subject(&headers)?;
    validate_request(&request)?;

    let command = CreateAccessGrantCommand::new(CreateAccessGrantCommandParts {
        issued_by: subject,
        owner_user_id: request.user_id,
        bucket_name: request.bucket_name,
        prefix: request.prefix,
        can_read: request.can_read,
        can_write: request.can_write,
        can_delete: request.can_delete,
        can_list: request.can_list,
        storage_backend_id: request.storage_backend_id,
        description: request.description,
    })
    .map_err(map_domain_error)?;

    let grant = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(AccessGrantResource::from(&grant))))
}

#[utoipa::path(
    get,
    path = "/access-control/grants",
    tag = "access-control",
    params(ListAccessGrantsQueryResource),
    security(("actorId" = []), ("actorAdmin" = [])),
    responses(
        (status = 200, description = "Grants", body = [AccessGrantResource]),
        (status = 403, description = "Administrator required", body = AccessControlErrorResponseResource)
    )
)]
pub async fn list_access_grants(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
    Query(query): Query<ListAccessGrantsQueryResource>,
) -> Result<Json<Vec<AccessGrantResource>>, ErrorResponse> {
    let subject = parse_subject(&headers)?;
    let query = ListAccessGrantsQuery::new(subject, query.user_id).map_err(map_domain_error)?;

    let grants = state
        .query_service
        .handle_list_grants(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(grants.iter().map(AccessGrantResource::from).collect()))
}

#[utoipa::path(
    get,
    path = "/access-control/grants/mine",
    tag = "access-control",
    security(("actorId" = [])),
    responses(
        (status = 200, description = "Grants held by the caller", body = [AccessGrantResource]),
        (status = 401, description = "Missing actor", body = AccessControlErrorResponseResource)
    )
)]
pub async fn list_my_access_grants(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<AccessGrantResource>>, ErrorResponse> {
    let subject = parse_subject(&headers)?;

    let grants = state
        .query_service
        .handle_list_accessible(&subject)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(grants.iter().map(AccessGrantResource::from).collect()))
}

#[utoipa::path(
    get,
    path = "/access-control/grants/statistics",
    tag = "access-control",
    security(("actorId" = []), ("actorAdmin" = [])),
    responses(
        (status = 200, description = "Grant store statistics", body = GrantStatisticsResource),
        (status = 403, description = "Administrator required", body = AccessControlErrorResponseResource)
    )
)]
pub async fn grant_statistics(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<GrantStatisticsResource>, ErrorResponse> {
    let subject = parse_subject(&headers)?;

    let statistics = state
        .query_service
        .handle_grant_statistics(&subject)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(GrantStatisticsResource {
        total_grants: statistics.total_grants,
        distinct_buckets: statistics.distinct_buckets,
    }))
}

#[utoipa::path(
    patch,
    path = "/access-control/grants/{grant_id}",
    tag = "access-control",
    params(("grant_id" = String, Path, description = "Grant id")),
    request_body = UpdateAccessGrantRequestResource,
    security(("actorId" = []), ("actorAdmin" = [])),
    responses(
        (status = 200, description = "Grant updated", body = AccessGrantResource),
        (status = 400, description = "Invalid request", body = AccessControlErrorResponseResource),
        (status = 403, description = "Administrator required", body = AccessControlErrorResponseResource),
        (status = 404, description = "Grant not found", body = AccessControlErrorResponseResource)
    )
)]
pub async fn update_access_grant(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
    Path(grant_id): Path<String>,
    Json(request): Json<UpdateAccessGrantRequestResource>,
) -> Result<Json<AccessGrantResource>, ErrorResponse> {
    let subject = parse_subject(&headers)?;
    validate_request(&request)?;

    let command = UpdateAccessGrantCommand::new(UpdateAccessGrantCommandParts {
        issued_by: subject,
        grant_id,
        bucket_name: request.bucket_name,
        prefix: request.prefix,
        can_read: request.can_read,
        can_write: request.can_write,
        can_delete: request.can_delete,
        can_list: request.can_list,
        description: request.description,
        storage_backend_id: request.storage_backend_id,
    })
    .map_err(map_domain_error)?;

    let grant = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(AccessGrantResource::from(&grant)))
}

#[utoipa::path(
    delete,
    path = "/access-control/grants/{grant_id}",
    tag = "access-control",
    params(("grant_id" = String, Path, description = "Grant id")),
    security(("actorId" = []), ("actorAdmin" = [])),
    responses(
        (status = 204, description = "Grant deleted"),
        (status = 403, description = "Administrator required", body = AccessControlErrorResponseResource),
        (status = 404, description = "Grant not found", body = AccessControlErrorResponseResource)
    )
)]
pub async fn delete_access_grant(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
    Path(grant_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let subject = parse_subject(&headers)?;
    let command = DeleteAccessGrantCommand::new(subject, grant_id).map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/access-control/users/{user_id}/grants",
    tag = "access-control",
    params(("user_id" = String, Path, description = "User whose grants are revoked")),
    security(("actorId" = []), ("actorAdmin" = [])),
    responses(
        (status = 200, description = "Grants revoked", body = RevokedGrantsResource),
        (status = 403, description = "Administrator required", body = AccessControlErrorResponseResource)
    )
)]
pub async fn revoke_user_grants(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<Json<RevokedGrantsResource>, ErrorResponse> {
    let subject = parse_subject(&headers)?;
    let command = RevokeUserGrantsCommand::new(subject, user_id).map_err(map_domain_error)?;
    let user_id = command.user_id().value();

    let revoked_grants = state
        .command_service
        .handle_revoke_user_grants(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(RevokedGrantsResource {
        user_id,
        revoked_grants,
    }))
}

#[utoipa::path(
    post,
    path = "/access-control/decisions/resolve",
    tag = "access-control",
    request_body = ResolveAccessRequestResource,
    security(("actorId" = [])),
    responses(
        (status = 200, description = "Access decision", body = AccessDecisionResource),
        (status = 400, description = "Unknown action or invalid bucket", body = AccessControlErrorResponseResource),
        (status = 503, description = "Grant store unavailable", body = AccessControlErrorResponseResource)
    )
)]
pub async fn resolve_access(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<ResolveAccessRequestResource>,
) -> Result<Json<AccessDecisionResource>, ErrorResponse> {
    let subject = parse_subject(&headers)?;
    validate_request(&request)?;

    let query = ResolveAccessQuery::new(ResolveAccessQueryParts {
        subject,
        bucket_name: request.bucket_name,
        object_key: request.object_key,
        action_name: request.action,
    })
    .map_err(map_domain_error)?;

    let decision = state
        .resolution_service
        .handle_resolve(query)
        .await
        .map_err(map_domain_error)?;

    let matched_grant = decision.matched_grant.as_ref();
    Ok(Json(AccessDecisionResource {
        allowed: decision.allowed,
        matched_grant_id: matched_grant.map(|g| g.id().value()),
        storage_backend_id: matched_grant
            .and_then(|g| g.storage_backend_id())
            .map(|id| id.value()),
        reason: decision.reason,
    }))
}

#[utoipa::path(
    post,
    path = "/access-control/decisions/expand",
    tag = "access-control",
    request_body = ExpandVisiblePrefixesRequestResource,
    security(("actorId" = [])),
    responses(
        (status = 200, description = "Visible sub-prefixes", body = [SyntheticDirectoryEntryResource]),
        (status = 400, description = "Invalid bucket", body = AccessControlErrorResponseResource)
    )
)]
pub async fn expand_visible_prefixes(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<ExpandVisiblePrefixesRequestResource>,
) -> Result<Json<Vec<SyntheticDirectoryEntryResource>>, ErrorResponse> {
    let subject = parse_subject(&headers)?;
    validate_request(&request)?;

    let query = ExpandVisiblePrefixesQuery::new(subject, request.bucket_name, request.prefix)
        .map_err(map_domain_error)?;

    let entries = state
        .resolution_service
        .handle_expand(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        entries
            .into_iter()
            .map(|entry| SyntheticDirectoryEntryResource {
                key: entry.key,
                size: entry.size,
                etag: entry.etag,
                last_modified: entry.last_modified,
            })
            .collect(),
    ))
}

fn parse_subject(headers: &HeaderMap) -> Result<AccessSubject, ErrorResponse> {
    let actor = RequestActor::from_headers(headers).map_err(|error| {
        (
            StatusCode::UNAUTHORIZED,
            Json(AccessControlErrorResponseResource {
                code: "unauthenticated".to_string(),
                message: error.to_string(),
            }),
        )
    })?;

    Ok(AccessSubject::new(
        UserId::from_uuid(actor.user_id),
        actor.is_administrator,
    ))
}

fn validate_request<T: Validate>(request: &T) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(AccessControlErrorResponseResource {
                code: "invalid_request".to_string(),
                message: validation_error.to_string(),
            }),
        )
    })
}

fn map_domain_error(error: AccessControlDomainError) -> ErrorResponse {
    let (status, code) = match error {
        AccessControlDomainError::InvalidUserId
        | AccessControlDomainError::InvalidGrantId
        | AccessControlDomainError::InvalidBucketName
        | AccessControlDomainError::InvalidStorageBackendId
        | AccessControlDomainError::UnknownGrantSelectionPolicy(_) => {
            (StatusCode::BAD_REQUEST, "invalid_request")
        }
        AccessControlDomainError::UnknownAction(_) => (StatusCode::BAD_REQUEST, "unknown_action"),
        AccessControlDomainError::AdministratorRequired => {
            (StatusCode::FORBIDDEN, "administrator_required")
        }
        AccessControlDomainError::GrantNotFound => (StatusCode::NOT_FOUND, "grant_not_found"),
        AccessControlDomainError::GrantStoreUnavailable(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, "grant_store_unavailable")
        }
    };

    (
        status,
        Json(AccessControlErrorResponseResource {
            code: code.to_string(),
            message: error.to_string(),
        }),
    )
}

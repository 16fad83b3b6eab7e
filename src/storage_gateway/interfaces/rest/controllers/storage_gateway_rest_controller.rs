use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use validator::Validate;

use crate::{
    shared::interfaces::rest::request_actor::RequestActor,
    storage_gateway::{
        domain::{
            model::{
                commands::{
                    authorize_storage_operation_command::AuthorizeStorageOperationCommand,
                    report_operation_outcome_command::{
                        ReportOperationOutcomeCommand, ReportOperationOutcomeCommandParts,
                    },
                },
                enums::storage_gateway_domain_error::StorageGatewayDomainError,
                value_objects::storage_actor::StorageActor,
            },
            services::storage_mediation_service::StorageMediationService,
        },
        interfaces::rest::resources::{
            operation_outcome_resource::{
                OperationOutcomeReceiptResource, ReportOperationOutcomeRequestResource,
            },
            storage_authorization_resource::{
                AuthorizeStorageOperationRequestResource, StorageAuthorizationResource,
            },
            storage_gateway_error_response_resource::StorageGatewayErrorResponseResource,
        },
    },
};

type ErrorResponse = (StatusCode, Json<StorageGatewayErrorResponseResource>);

#[derive(Clone)]
pub struct StorageGatewayRestControllerState {
    pub mediation_service: Arc<dyn StorageMediationService>,
}

pub fn router(state: StorageGatewayRestControllerState) -> Router {
    Router::new()
        .route("/storage/authorize", post(authorize_storage_operation))
        .route("/storage/outcomes", post(report_operation_outcome))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/storage/authorize",
    tag = "storage-gateway",
    request_body = AuthorizeStorageOperationRequestResource,
    security(("actorId" = []), ("actorAdmin" = [])),
    responses(
        (status = 200, description = "Operation granted or partial listing", body = StorageAuthorizationResource),
        (status = 400, description = "Unknown operation or invalid request", body = StorageGatewayErrorResponseResource),
        (status = 401, description = "Missing actor", body = StorageGatewayErrorResponseResource),
        (status = 403, description = "Permission denied", body = StorageGatewayErrorResponseResource),
        (status = 503, description = "Grant store unavailable", body = StorageGatewayErrorResponseResource)
    )
)]
pub async fn authorize_storage_operation(
    State(state): State<StorageGatewayRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<AuthorizeStorageOperationRequestResource>,
) -> Result<Json<StorageAuthorizationResource>, ErrorResponse> {
    let actor = parse_actor(&headers)?;
    validate_request(&request)?;

    let command = AuthorizeStorageOperationCommand::new(
        actor,
        &request.operation,
        request.bucket_name,
        request.object_key,
    )
    .map_err(map_domain_error)?;

    let authorization = state
        .mediation_service
        .handle_authorize(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(StorageAuthorizationResource::from(authorization)))
}

#[utoipa::path(
    post,
    path = "/storage/outcomes",
    tag = "storage-gateway",
    request_body = ReportOperationOutcomeRequestResource,
    security(("actorId" = [])),
    responses(
        (status = 201, description = "Outcome recorded", body = OperationOutcomeReceiptResource),
        (status = 400, description = "Invalid request", body = StorageGatewayErrorResponseResource),
        (status = 503, description = "Audit ledger unavailable", body = StorageGatewayErrorResponseResource)
    )
)]
pub async fn report_operation_outcome(
    State(state): State<StorageGatewayRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<ReportOperationOutcomeRequestResource>,
) -> Result<(StatusCode, Json<OperationOutcomeReceiptResource>), ErrorResponse> {
    let actor = parse_actor(&headers)?;
    validate_request(&request)?;

    let command = ReportOperationOutcomeCommand::new(ReportOperationOutcomeCommandParts {
        actor,
        operation_name: request.operation,
        bucket_name: request.bucket_name,
        object_key: request.object_key,
        succeeded: request.succeeded,
        error_detail: request.error_detail,
        context_metadata: request.context_metadata,
    })
    .map_err(map_domain_error)?;

    let receipt = state
        .mediation_service
        .handle_report_outcome(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(OperationOutcomeReceiptResource {
            record_id: receipt.record_id,
            recorded_at: receipt.recorded_at,
        }),
    ))
}

fn parse_actor(headers: &HeaderMap) -> Result<StorageActor, ErrorResponse> {
    let actor = RequestActor::from_headers(headers).map_err(|error| {
        (
            StatusCode::UNAUTHORIZED,
            Json(StorageGatewayErrorResponseResource {
                code: "unauthenticated".to_string(),
                message: error.to_string(),
            }),
        )
    })?;

    Ok(StorageActor {
        user_id: actor.user_id,
        is_administrator: actor.is_administrator,
        source_address: actor.source_address,
        user_agent: actor.user_agent,
    })
}

fn validate_request<T: Validate>(request: &T) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(StorageGatewayErrorResponseResource {
                code: "invalid_request".to_string(),
                message: validation_error.to_string(),
            }),
        )
    })
}

fn map_domain_error(error: StorageGatewayDomainError) -> ErrorResponse {
    let (status, code) = match error {
        StorageGatewayDomainError::PermissionDenied(_) => {
            (StatusCode::FORBIDDEN, "permission_denied")
        }
        StorageGatewayDomainError::UnknownAction(_) => (StatusCode::BAD_REQUEST, "unknown_action"),
        StorageGatewayDomainError::InvalidRequest(_) => {
            (StatusCode::BAD_REQUEST, "invalid_request")
        }
        StorageGatewayDomainError::GrantStoreUnavailable(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, "grant_store_unavailable")
        }
        StorageGatewayDomainError::AuditWriteFailure(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, "audit_write_failure")
        }
    };

    (
        status,
        Json(StorageGatewayErrorResponseResource {
            code: code.to_string(),
            message: error.to_string(),
        }),
    )
}

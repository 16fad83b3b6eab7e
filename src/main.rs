use axum::Router;
use bucket_warden::{
    access_control::{
        build_access_control_router,
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
    audit::{
        AuditLedger, build_audit_router,
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
    config::{app_config::AppConfig, tracing_config::init_tracing},
    shared::{
        infrastructure::persistence::repository_registry::RepositoryRegistry,
        interfaces::rest::openapi::security::ActorHeadersSecurityAddon,
    },
    storage_gateway::{
        build_storage_gateway_router,
        interfaces::rest::resources::{
            operation_outcome_resource::{
                OperationOutcomeReceiptResource, ReportOperationOutcomeRequestResource,
            },
            storage_authorization_resource::{
                AuthorizeStorageOperationRequestResource, StorageAuthorizationResource,
                VisibleDirectoryEntryResource,
            },
            storage_gateway_error_response_resource::StorageGatewayErrorResponseResource,
        },
    },
};
use dotenvy::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        bucket_warden::access_control::interfaces::rest::controllers::access_control_rest_controller::create_access_grant,
        bucket_warden::access_control::interfaces::rest::controllers::access_control_rest_controller::list_access_grants,
        bucket_warden::access_control::interfaces::rest::controllers::access_control_rest_controller::list_my_access_grants,
        bucket_warden::access_control::interfaces::rest::controllers::access_control_rest_controller::grant_statistics,
        bucket_warden::access_control::interfaces::rest::controllers::access_control_rest_controller::update_access_grant,
        bucket_warden::access_control::interfaces::rest::controllers::access_control_rest_controller::delete_access_grant,
        bucket_warden::access_control::interfaces::rest::controllers::access_control_rest_controller::revoke_user_grants,
        bucket_warden::access_control::interfaces::rest::controllers::access_control_rest_controller::resolve_access,
        bucket_warden::access_control::interfaces::rest::controllers::access_control_rest_controller::expand_visible_prefixes,
        bucket_warden::storage_gateway::interfaces::rest::controllers::storage_gateway_rest_controller::authorize_storage_operation,
        bucket_warden::storage_gateway::interfaces::rest::controllers::storage_gateway_rest_controller::report_operation_outcome,
        bucket_warden::audit::interfaces::rest::controllers::audit_rest_controller::search_audit_records,
        bucket_warden::audit::interfaces::rest::controllers::audit_rest_controller::list_my_audit_records,
        bucket_warden::audit::interfaces::rest::controllers::audit_rest_controller::list_recent_audit_records,
        bucket_warden::audit::interfaces::rest::controllers::audit_rest_controller::list_bucket_audit_records,
        bucket_warden::audit::interfaces::rest::controllers::audit_rest_controller::user_activity_stats,
        bucket_warden::audit::interfaces::rest::controllers::audit_rest_controller::audit_health
    ),
    components(
        schemas(
            CreateAccessGrantRequestResource,
            UpdateAccessGrantRequestResource,
            ListAccessGrantsQueryResource,
            AccessGrantResource,
            RevokedGrantsResource,
            GrantStatisticsResource,
            ResolveAccessRequestResource,
            AccessDecisionResource,
            ExpandVisiblePrefixesRequestResource,
            SyntheticDirectoryEntryResource,
            AccessControlErrorResponseResource,
            AuthorizeStorageOperationRequestResource,
            StorageAuthorizationResource,
            VisibleDirectoryEntryResource,
            ReportOperationOutcomeRequestResource,
            OperationOutcomeReceiptResource,
            StorageGatewayErrorResponseResource,
            SearchAuditRecordsQueryResource,
            AuditLimitQueryResource,
            UserActivityStatsQueryResource,
            AuditRecordResource,
            AuditRecordPageResource,
            UserActivityStatsResource,
            AuditHealthResource,
            AuditErrorResponseResource
        )
    ),
    tags(
        (name = "access-control", description = "Prefix-scoped bucket grants and permission resolution"),
        (name = "storage-gateway", description = "Mediation of object-storage operations"),
        (name = "audit", description = "Append-only audit ledger")
    ),
    modifiers(&ActorHeadersSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config);

    let registry = RepositoryRegistry::connect(&config)
        .await
        .expect("failed to initialise persistence");
    let audit_ledger = AuditLedger::new(&config, &registry);

    let app = Router::new()
        .merge(build_access_control_router(&config, &registry))
        .merge(build_storage_gateway_router(&config, &registry, &audit_ledger))
        .merge(build_audit_router(&audit_ledger))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(
        port = config.port,
        backend = ?config.persistence_backend,
        selection_policy = config.grant_selection_policy.as_str(),
        "bucket warden listening"
    );
    tracing::info!("swagger ui available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}

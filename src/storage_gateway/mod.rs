use std::sync::Arc;

use axum::Router;

use crate::{
    access_control::application::{
        acl::access_control_facade_impl::AccessControlFacadeImpl,
        query_services::permission_resolution_service_impl::PermissionResolutionServiceImpl,
    },
    audit::AuditLedger,
    config::app_config::AppConfig,
    shared::infrastructure::persistence::repository_registry::RepositoryRegistry,
    storage_gateway::{
        application::{
            acl::{
                storage_access_facade_real_impl::StorageAccessFacadeRealImpl,
                storage_audit_facade_real_impl::StorageAuditFacadeRealImpl,
            },
            command_services::storage_mediation_service_impl::StorageMediationServiceImpl,
        },
        interfaces::rest::controllers::storage_gateway_rest_controller::{
            StorageGatewayRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_storage_gateway_router(
    config: &AppConfig,
    registry: &RepositoryRegistry,
    ledger: &AuditLedger,
) -> Router {
    let resolution_service = Arc::new(PermissionResolutionServiceImpl::new_with_policy(
        registry.access_grant_repository.clone(),
        config.grant_selection_policy,
    ));
    let access_facade = Arc::new(StorageAccessFacadeRealImpl::new(Arc::new(
        AccessControlFacadeImpl::new(resolution_service),
    )));
    let audit_facade = Arc::new(StorageAuditFacadeRealImpl::new(ledger.facade()));

    let mediation_service = Arc::new(StorageMediationServiceImpl::new(
        access_facade,
        audit_facade,
    ));

    router(StorageGatewayRestControllerState { mediation_service })
}

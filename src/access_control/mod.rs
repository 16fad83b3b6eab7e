use std::sync::Arc;

use axum::Router;

use crate::{
    access_control::{
        application::{
            command_services::access_grant_command_service_impl::AccessGrantCommandServiceImpl,
            query_services::{
                access_grant_query_service_impl::AccessGrantQueryServiceImpl,
                permission_resolution_service_impl::PermissionResolutionServiceImpl,
            },
        },
        interfaces::rest::controllers::access_control_rest_controller::{
            AccessControlRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
    shared::infrastructure::persistence::repository_registry::RepositoryRegistry,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_access_control_router(config: &AppConfig, registry: &RepositoryRegistry) -> Router {
    let access_grant_repository = registry.access_grant_repository.clone();

    let command_service = Arc::new(AccessGrantCommandServiceImpl::new(
        access_grant_repository.clone(),
    ));
    let query_service = Arc::new(AccessGrantQueryServiceImpl::new(
        access_grant_repository.clone(),
    ));
    let resolution_service = Arc::new(PermissionResolutionServiceImpl::new_with_policy(
        access_grant_repository,
        config.grant_selection_policy,
    ));

    router(AccessControlRestControllerState {
        command_service,
        query_service,
        resolution_service,
    })
}

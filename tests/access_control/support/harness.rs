use std::sync::Arc;

use bucket_warden::access_control::{
    application::{
        command_services::access_grant_command_service_impl::AccessGrantCommandServiceImpl,
        query_services::{
            access_grant_query_service_impl::AccessGrantQueryServiceImpl,
            permission_resolution_service_impl::PermissionResolutionServiceImpl,
        },
    },
    domain::model::enums::grant_selection_policy::GrantSelectionPolicy,
    interfaces::rest::controllers::access_control_rest_controller::AccessControlRestControllerState,
};

use super::fakes::FakeAccessGrantRepository;

pub struct AccessControlHarness {
    pub repository: Arc<FakeAccessGrantRepository>,
    pub command_service: AccessGrantCommandServiceImpl,
    pub query_service: AccessGrantQueryServiceImpl,
    pub resolution_service: PermissionResolutionServiceImpl,
}

pub fn create_harness() -> AccessControlHarness {
    create_harness_with_policy(GrantSelectionPolicy::FirstMatch)
}

pub fn create_harness_with_policy(policy: GrantSelectionPolicy) -> AccessControlHarness {
    let repository = Arc::new(FakeAccessGrantRepository::new());

    AccessControlHarness {
        command_service: AccessGrantCommandServiceImpl::new(repository.clone()),
        query_service: AccessGrantQueryServiceImpl::new(repository.clone()),
        resolution_service: PermissionResolutionServiceImpl::new_with_policy(
            repository.clone(),
            policy,
        ),
        repository,
    }
}

pub fn create_controller_state(
    repository: Arc<FakeAccessGrantRepository>,
) -> AccessControlRestControllerState {
    AccessControlRestControllerState {
        command_service: Arc::new(AccessGrantCommandServiceImpl::new(repository.clone())),
        query_service: Arc::new(AccessGrantQueryServiceImpl::new(repository.clone())),
        resolution_service: Arc::new(PermissionResolutionServiceImpl::new(repository)),
    }
}

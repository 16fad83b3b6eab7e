use std::sync::Arc;

use bucket_warden::{
    access_control::{
        application::{
            acl::access_control_facade_impl::AccessControlFacadeImpl,
            command_services::access_grant_command_service_impl::AccessGrantCommandServiceImpl,
            query_services::permission_resolution_service_impl::PermissionResolutionServiceImpl,
        },
        domain::{
            model::entities::access_grant::{AccessGrant, AccessGrantRights},
            services::access_grant_command_service::AccessGrantCommandService,
        },
    },
    audit::{
        application::{
            acl::audit_ledger_facade_impl::AuditLedgerFacadeImpl,
            command_services::audit_record_command_service_impl::AuditRecordCommandServiceImpl,
        },
        domain::{
            model::entities::audit_record::AuditRecord,
            services::audit_record_command_service::AuditRecordCommandService,
        },
        infrastructure::persistence::repositories::audit_record_repository::{
            AuditRecordCriteria, AuditRecordRepository,
        },
    },
    storage_gateway::{
        application::{
            acl::{
                storage_access_facade_real_impl::StorageAccessFacadeRealImpl,
                storage_audit_facade_real_impl::StorageAuditFacadeRealImpl,
            },
            command_services::storage_mediation_service_impl::StorageMediationServiceImpl,
        },
        interfaces::rest::controllers::storage_gateway_rest_controller::StorageGatewayRestControllerState,
    },
};

use super::{
    fakes::{SwitchableAuditRepository, SwitchableGrantRepository},
    fixtures::grant_for,
};

pub struct StorageGatewayHarness {
    pub grants: Arc<SwitchableGrantRepository>,
    pub ledger: Arc<SwitchableAuditRepository>,
    pub grant_commands: AccessGrantCommandServiceImpl,
    pub audit_commands: Arc<AuditRecordCommandServiceImpl>,
    pub mediation_service: Arc<StorageMediationServiceImpl>,
}

impl StorageGatewayHarness {
    pub async fn issue_grant(
        &self,
        owner: &str,
        prefix: &str,
        rights: AccessGrantRights,
    ) -> AccessGrant {
        self.grant_commands
            .handle_create(grant_for(owner, prefix, rights))
            .await
            .expect("grant created")
    }

    pub async fn all_records(&self) -> Vec<AuditRecord> {
        self.ledger
            .find(&AuditRecordCriteria::default(), 1_000, 0)
            .await
            .expect("ledger readable")
    }

    pub fn failed_appends(&self) -> u64 {
        self.audit_commands.failed_append_count()
    }

    pub fn controller_state(&self) -> StorageGatewayRestControllerState {
        StorageGatewayRestControllerState {
            mediation_service: self.mediation_service.clone(),
        }
    }
}

pub fn create_harness() -> StorageGatewayHarness {
    let grants = Arc::new(SwitchableGrantRepository::default());
    let ledger = Arc::new(SwitchableAuditRepository::default());

    let resolution_service = Arc::new(PermissionResolutionServiceImpl::new(grants.clone()));
    let audit_commands = Arc::new(AuditRecordCommandServiceImpl::new(ledger.clone()));

    let mediation_service = Arc::new(StorageMediationServiceImpl::new(
        Arc::new(StorageAccessFacadeRealImpl::new(Arc::new(
            AccessControlFacadeImpl::new(resolution_service),
        ))),
        Arc::new(StorageAuditFacadeRealImpl::new(Arc::new(
            AuditLedgerFacadeImpl::new(audit_commands.clone()),
        ))),
    ));

    StorageGatewayHarness {
        grant_commands: AccessGrantCommandServiceImpl::new(grants.clone()),
        grants,
        ledger,
        audit_commands,
        mediation_service,
    }
}

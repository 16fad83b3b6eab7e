use std::sync::Arc;

use axum::Router;

use crate::{
    audit::{
        application::{
            acl::audit_ledger_facade_impl::AuditLedgerFacadeImpl,
            command_services::audit_record_command_service_impl::AuditRecordCommandServiceImpl,
            query_services::audit_record_query_service_impl::AuditRecordQueryServiceImpl,
        },
        domain::{
            model::value_objects::audit_query_limit::AuditQueryLimits,
            services::{
                audit_record_command_service::AuditRecordCommandService,
                audit_record_query_service::AuditRecordQueryService,
            },
        },
        interfaces::{
            acl::audit_ledger_facade::AuditLedgerFacade,
            rest::controllers::audit_rest_controller::{AuditRestControllerState, router},
        },
    },
    config::app_config::AppConfig,
    shared::infrastructure::persistence::repository_registry::RepositoryRegistry,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Ledger services shared by the audit routes and by every context that
/// records audit entries, so the append failure counter is process-wide.
#[derive(Clone)]
pub struct AuditLedger {
    pub command_service: Arc<dyn AuditRecordCommandService>,
    pub query_service: Arc<dyn AuditRecordQueryService>,
}

impl AuditLedger {
    pub fn new(config: &AppConfig, registry: &RepositoryRegistry) -> Self {
        let audit_record_repository = registry.audit_record_repository.clone();

        Self {
            command_service: Arc::new(AuditRecordCommandServiceImpl::new(
                audit_record_repository.clone(),
            )),
            query_service: Arc::new(AuditRecordQueryServiceImpl::new_with_limits(
                audit_record_repository,
                AuditQueryLimits::new(
                    config.audit_default_query_limit,
                    config.audit_max_query_limit,
                ),
            )),
        }
    }

    pub fn facade(&self) -> Arc<dyn AuditLedgerFacade> {
        Arc::new(AuditLedgerFacadeImpl::new(self.command_service.clone()))
    }
}

pub fn build_audit_router(ledger: &AuditLedger) -> Router {
    router(AuditRestControllerState {
        command_service: ledger.command_service.clone(),
        query_service: ledger.query_service.clone(),
    })
}

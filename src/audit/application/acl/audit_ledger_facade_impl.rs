use std::sync::Arc;

use async_trait::async_trait;

use crate::audit::{
    domain::{
        model::{
            commands::record_audit_event_command::{
                RecordAuditEventCommand, RecordAuditEventCommandParts,
            },
            enums::audit_domain_error::AuditDomainError,
        },
        services::audit_record_command_service::AuditRecordCommandService,
    },
    interfaces::acl::audit_ledger_facade::{
        AuditLedgerEntryRequest, AuditLedgerFacade, AuditLedgerReceipt,
    },
};

pub struct AuditLedgerFacadeImpl {
    command_service: Arc<dyn AuditRecordCommandService>,
}

impl AuditLedgerFacadeImpl {
    pub fn new(command_service: Arc<dyn AuditRecordCommandService>) -> Self {
        Self { command_service }
    }
}

#[async_trait]
impl AuditLedgerFacade for AuditLedgerFacadeImpl {
    async fn record_entry(
        &self,
        request: AuditLedgerEntryRequest,
    ) -> Result<AuditLedgerReceipt, AuditDomainError> {
        let command = RecordAuditEventCommand::new(RecordAuditEventCommandParts {
            actor_user_id: request.actor_user_id,
            action_name: request.action_name,
            bucket_name: request.bucket_name,
            object_key: request.object_key,
            succeeded: request.succeeded,
            source_address: request.source_address,
            user_agent: request.user_agent,
            context_metadata: request.context_metadata,
            error_detail: request.error_detail,
        })?;

        let record = self.command_service.handle_record(command).await?;

        Ok(AuditLedgerReceipt {
            record_id: record.id().value(),
            recorded_at: record.recorded_at(),
        })
    }
}

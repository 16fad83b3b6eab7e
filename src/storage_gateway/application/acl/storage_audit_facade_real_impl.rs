use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    audit::interfaces::acl::audit_ledger_facade::{AuditLedgerEntryRequest, AuditLedgerFacade},
    storage_gateway::{
        domain::model::enums::storage_gateway_domain_error::StorageGatewayDomainError,
        interfaces::acl::storage_audit_facade::{
            StorageAuditEntry, StorageAuditFacade, StorageAuditReceipt,
        },
    },
};

pub struct StorageAuditFacadeRealImpl {
    facade: Arc<dyn AuditLedgerFacade>,
}

impl StorageAuditFacadeRealImpl {
    pub fn new(facade: Arc<dyn AuditLedgerFacade>) -> Self {
        Self { facade }
    }
}

#[async_trait]
impl StorageAuditFacade for StorageAuditFacadeRealImpl {
    async fn record(
        &self,
        entry: StorageAuditEntry,
    ) -> Result<StorageAuditReceipt, StorageGatewayDomainError> {
        let receipt = self
            .facade
            .record_entry(AuditLedgerEntryRequest {
                actor_user_id: entry.actor.user_id,
                action_name: entry.action_name.to_string(),
                bucket_name: entry.bucket_name,
                object_key: entry.object_key,
                succeeded: entry.succeeded,
                source_address: entry.actor.source_address,
                user_agent: entry.actor.user_agent,
                context_metadata: entry.context_metadata,
                error_detail: entry.error_detail,
            })
            .await
            .map_err(|e| StorageGatewayDomainError::AuditWriteFailure(e.to_string()))?;

        Ok(StorageAuditReceipt {
            record_id: receipt.record_id,
            recorded_at: receipt.recorded_at,
        })
    }
}

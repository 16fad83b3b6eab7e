use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::audit::domain::model::enums::audit_domain_error::AuditDomainError;

#[derive(Clone, Debug)]
pub struct AuditLedgerEntryRequest {
    pub actor_user_id: Uuid,
    pub action_name: String,
    pub bucket_name: String,
    pub object_key: String,
    pub succeeded: bool,
    pub source_address: Option<String>,
    pub user_agent: Option<String>,
    pub context_metadata: Option<Value>,
    pub error_detail: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AuditLedgerReceipt {
    pub record_id: Uuid,
    pub recorded_at: DateTime<Utc>,
}

/// Write access to the ledger for other bounded contexts.
#[async_trait]
pub trait AuditLedgerFacade: Send + Sync {
    async fn record_entry(
        &self,
        request: AuditLedgerEntryRequest,
    ) -> Result<AuditLedgerReceipt, AuditDomainError>;
}

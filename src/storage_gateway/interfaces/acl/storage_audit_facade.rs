use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::storage_gateway::domain::model::{
    enums::storage_gateway_domain_error::StorageGatewayDomainError,
    value_objects::storage_actor::StorageActor,
};

#[derive(Clone, Debug)]
pub struct StorageAuditEntry {
    pub actor: StorageActor,
    pub action_name: &'static str,
    pub bucket_name: String,
    pub object_key: String,
    pub succeeded: bool,
    pub context_metadata: Option<Value>,
    pub error_detail: Option<String>,
}

#[derive(Clone, Debug)]
pub struct StorageAuditReceipt {
    pub record_id: Uuid,
    pub recorded_at: DateTime<Utc>,
}

#[async_trait]
pub trait StorageAuditFacade: Send + Sync {
    async fn record(
        &self,
        entry: StorageAuditEntry,
    ) -> Result<StorageAuditReceipt, StorageGatewayDomainError>;
}

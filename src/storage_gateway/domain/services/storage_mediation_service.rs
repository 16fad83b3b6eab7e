use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::storage_gateway::domain::model::{
    commands::{
        authorize_storage_operation_command::AuthorizeStorageOperationCommand,
        report_operation_outcome_command::ReportOperationOutcomeCommand,
    },
    enums::storage_gateway_domain_error::StorageGatewayDomainError,
    value_objects::visible_directory_entry::VisibleDirectoryEntry,
};

#[derive(Clone, Debug)]
pub enum StorageAccessAuthorization {
    /// The operation may proceed against the (optional) bound storage backend.
    Granted {
        matched_grant_id: Option<Uuid>,
        storage_backend_id: Option<Uuid>,
        reason: String,
        audit_record_id: Option<Uuid>,
    },
    /// A denied list that the actor may still browse through deeper grants.
    PartialListing {
        entries: Vec<VisibleDirectoryEntry>,
        audit_record_id: Option<Uuid>,
    },
}

#[derive(Clone, Debug)]
pub struct OperationOutcomeReceipt {
    pub record_id: Uuid,
    pub recorded_at: DateTime<Utc>,
}

#[async_trait]
pub trait StorageMediationService: Send + Sync {
    async fn handle_authorize(
        &self,
        command: AuthorizeStorageOperationCommand,
    ) -> Result<StorageAccessAuthorization, StorageGatewayDomainError>;

    async fn handle_report_outcome(
        &self,
        command: ReportOperationOutcomeCommand,
    ) -> Result<OperationOutcomeReceipt, StorageGatewayDomainError>;
}

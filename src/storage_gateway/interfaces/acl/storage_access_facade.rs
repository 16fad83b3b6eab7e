use async_trait::async_trait;
use uuid::Uuid;

use crate::storage_gateway::domain::model::{
    enums::{
        storage_gateway_domain_error::StorageGatewayDomainError,
        storage_operation::StorageOperation,
    },
    value_objects::{storage_actor::StorageActor, visible_directory_entry::VisibleDirectoryEntry},
};

#[derive(Clone, Debug)]
pub struct StorageAccessVerdict {
    pub allowed: bool,
    pub reason: String,
    pub matched_grant_id: Option<Uuid>,
    pub storage_backend_id: Option<Uuid>,
}

#[async_trait]
pub trait StorageAccessFacade: Send + Sync {
    async fn resolve(
        &self,
        actor: &StorageActor,
        bucket_name: &str,
        object_key: &str,
        operation: StorageOperation,
    ) -> Result<StorageAccessVerdict, StorageGatewayDomainError>;

    async fn expand(
        &self,
        actor: &StorageActor,
        bucket_name: &str,
        requested_prefix: &str,
    ) -> Result<Vec<VisibleDirectoryEntry>, StorageGatewayDomainError>;
}

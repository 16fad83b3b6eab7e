use crate::storage_gateway::domain::model::{
    enums::{
        storage_gateway_domain_error::StorageGatewayDomainError,
        storage_operation::StorageOperation,
    },
    value_objects::storage_actor::StorageActor,
};

#[derive(Clone, Debug)]
pub struct AuthorizeStorageOperationCommand {
    actor: StorageActor,
    operation: StorageOperation,
    bucket_name: String,
    object_key: String,
}

impl AuthorizeStorageOperationCommand {
    pub fn new(
        actor: StorageActor,
        operation_name: &str,
        bucket_name: String,
        object_key: String,
    ) -> Result<Self, StorageGatewayDomainError> {
        let operation = operation_name.parse::<StorageOperation>()?;
        let bucket_name = bucket_name.trim().to_string();
        if bucket_name.is_empty() {
            return Err(StorageGatewayDomainError::InvalidRequest(
                "bucket name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            actor,
            operation,
            bucket_name,
            object_key,
        })
    }

    pub fn actor(&self) -> &StorageActor {
        &self.actor
    }

    pub fn operation(&self) -> StorageOperation {
        self.operation
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn object_key(&self) -> &str {
        &self.object_key
    }
}

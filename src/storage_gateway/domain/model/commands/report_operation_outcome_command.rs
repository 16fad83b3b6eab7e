use serde_json::Value;

use crate::storage_gateway::domain::model::{
    enums::{
        storage_gateway_domain_error::StorageGatewayDomainError,
        storage_operation::StorageOperation,
    },
    value_objects::storage_actor::StorageActor,
};

/// Terminal result of a storage operation performed after authorization.
#[derive(Clone, Debug)]
pub struct ReportOperationOutcomeCommand {
    actor: StorageActor,
    operation: StorageOperation,
    bucket_name: String,
    object_key: String,
    succeeded: bool,
    error_detail: Option<String>,
    context_metadata: Option<Value>,
}

pub struct ReportOperationOutcomeCommandParts {
    pub actor: StorageActor,
    pub operation_name: String,
    pub bucket_name: String,
    pub object_key: String,
    pub succeeded: bool,
    pub error_detail: Option<String>,
    pub context_metadata: Option<Value>,
}

impl ReportOperationOutcomeCommand {
    pub fn new(parts: ReportOperationOutcomeCommandParts) -> Result<Self, StorageGatewayDomainError> {
        let operation = parts.operation_name.parse::<StorageOperation>()?;
        let bucket_name = parts.bucket_name.trim().to_string();
        if bucket_name.is_empty() {
            return Err(StorageGatewayDomainError::InvalidRequest(
                "bucket name must not be empty".to_string(),
            ));
        }
        if parts.succeeded && parts.error_detail.is_some() {
            return Err(StorageGatewayDomainError::InvalidRequest(
                "a successful outcome carries no error detail".to_string(),
            ));
        }

        Ok(Self {
            actor: parts.actor,
            operation,
            bucket_name,
            object_key: parts.object_key,
            succeeded: parts.succeeded,
            error_detail: parts.error_detail,
            context_metadata: parts.context_metadata,
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

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    pub fn context_metadata(&self) -> Option<&Value> {
        self.context_metadata.as_ref()
    }
}

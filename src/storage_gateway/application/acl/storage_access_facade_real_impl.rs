use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access_control::{
        domain::model::enums::access_control_domain_error::AccessControlDomainError,
        interfaces::acl::access_control_facade::{
            AccessControlFacade, AccessControlPermissionRequest, AccessControlSubject,
        },
    },
    storage_gateway::{
        domain::model::{
            enums::{
                storage_gateway_domain_error::StorageGatewayDomainError,
                storage_operation::StorageOperation,
            },
            value_objects::{
                storage_actor::StorageActor, visible_directory_entry::VisibleDirectoryEntry,
            },
        },
        interfaces::acl::storage_access_facade::{StorageAccessFacade, StorageAccessVerdict},
    },
};

pub struct StorageAccessFacadeRealImpl {
    facade: Arc<dyn AccessControlFacade>,
}

impl StorageAccessFacadeRealImpl {
    pub fn new(facade: Arc<dyn AccessControlFacade>) -> Self {
        Self { facade }
    }

    fn to_subject(actor: &StorageActor) -> AccessControlSubject {
        AccessControlSubject {
            user_id: actor.user_id,
            is_administrator: actor.is_administrator,
        }
    }
}

#[async_trait]
impl StorageAccessFacade for StorageAccessFacadeRealImpl {
    async fn resolve(
        &self,
        actor: &StorageActor,
        bucket_name: &str,
        object_key: &str,
        operation: StorageOperation,
    ) -> Result<StorageAccessVerdict, StorageGatewayDomainError> {
        let decision = self
            .facade
            .check_permission(AccessControlPermissionRequest {
                subject: Self::to_subject(actor),
                bucket_name: bucket_name.to_string(),
                object_key: object_key.to_string(),
                action_name: operation.required_action().to_string(),
            })
            .await
            .map_err(map_access_control_error)?;

        Ok(StorageAccessVerdict {
            allowed: decision.allowed,
            reason: decision.reason,
            matched_grant_id: decision.matched_grant_id,
            storage_backend_id: decision.storage_backend_id,
        })
    }

    async fn expand(
        &self,
        actor: &StorageActor,
        bucket_name: &str,
        requested_prefix: &str,
    ) -> Result<Vec<VisibleDirectoryEntry>, StorageGatewayDomainError> {
        let entries = self
            .facade
            .expand_visible_prefixes(
                Self::to_subject(actor),
                bucket_name.to_string(),
                requested_prefix.to_string(),
            )
            .await
            .map_err(map_access_control_error)?;

        Ok(entries
            .into_iter()
            .map(|entry| VisibleDirectoryEntry {
                key: entry.key,
                size: entry.size,
                etag: entry.etag,
                last_modified: entry.last_modified,
            })
            .collect())
    }
}

fn map_access_control_error(error: AccessControlDomainError) -> StorageGatewayDomainError {
    match error {
        AccessControlDomainError::GrantStoreUnavailable(detail) => {
            StorageGatewayDomainError::GrantStoreUnavailable(detail)
        }
        AccessControlDomainError::UnknownAction(action) => {
            StorageGatewayDomainError::UnknownAction(action)
        }
        other => StorageGatewayDomainError::InvalidRequest(other.to_string()),
    }
}

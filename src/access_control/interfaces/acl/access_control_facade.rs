use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

#[derive(Clone, Debug)]
pub struct AccessControlSubject {
    pub user_id: Uuid,
    pub is_administrator: bool,
}

#[derive(Clone, Debug)]
pub struct AccessControlPermissionRequest {
    pub subject: AccessControlSubject,
    pub bucket_name: String,
    pub object_key: String,
    pub action_name: String,
}

#[derive(Clone, Debug)]
pub struct AccessControlPermissionDecision {
    pub allowed: bool,
    pub reason: String,
    pub matched_grant_id: Option<Uuid>,
    pub storage_backend_id: Option<Uuid>,
}

#[derive(Clone, Debug)]
pub struct AccessControlVisibleEntry {
    pub key: String,
    pub size: u64,
    pub etag: String,
    pub last_modified: DateTime<Utc>,
}

/// Entry point other bounded contexts use to consult grants.
#[async_trait]
pub trait AccessControlFacade: Send + Sync {
    async fn check_permission(
        &self,
        request: AccessControlPermissionRequest,
    ) -> Result<AccessControlPermissionDecision, AccessControlDomainError>;

    async fn expand_visible_prefixes(
        &self,
        subject: AccessControlSubject,
        bucket_name: String,
        requested_prefix: String,
    ) -> Result<Vec<AccessControlVisibleEntry>, AccessControlDomainError>;
}

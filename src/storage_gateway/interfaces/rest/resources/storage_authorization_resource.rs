use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::storage_gateway::domain::{
    model::value_objects::visible_directory_entry::VisibleDirectoryEntry,
    services::storage_mediation_service::StorageAccessAuthorization,
};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct AuthorizeStorageOperationRequestResource {
    /// One of `upload`, `download`, `delete`, `list`.
    #[validate(length(min = 1))]
    pub operation: String,
    #[validate(length(min = 1, max = 255))]
    pub bucket_name: String,
    /// Object key, or the listed prefix for `list`.
    #[serde(default)]
    pub object_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct VisibleDirectoryEntryResource {
    pub key: String,
    pub size: u64,
    pub etag: String,
    pub last_modified: DateTime<Utc>,
}

impl From<VisibleDirectoryEntry> for VisibleDirectoryEntryResource {
    fn from(entry: VisibleDirectoryEntry) -> Self {
        Self {
            key: entry.key,
            size: entry.size,
            etag: entry.etag,
            last_modified: entry.last_modified,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct StorageAuthorizationResource {
    /// `granted` or `partial_listing`.
    pub decision: String,
    pub reason: Option<String>,
    pub matched_grant_id: Option<Uuid>,
    pub storage_backend_id: Option<Uuid>,
    pub audit_record_id: Option<Uuid>,
    pub entries: Vec<VisibleDirectoryEntryResource>,
}

impl From<StorageAccessAuthorization> for StorageAuthorizationResource {
    fn from(authorization: StorageAccessAuthorization) -> Self {
        match authorization {
            StorageAccessAuthorization::Granted {
                matched_grant_id,
                storage_backend_id,
                reason,
                audit_record_id,
            } => Self {
                decision: "granted".to_string(),
                reason: Some(reason),
                matched_grant_id,
                storage_backend_id,
                audit_record_id,
                entries: Vec::new(),
            },
            StorageAccessAuthorization::PartialListing {
                entries,
                audit_record_id,
            } => Self {
                decision: "partial_listing".to_string(),
                reason: None,
                matched_grant_id: None,
                storage_backend_id: None,
                audit_record_id,
                entries: entries
                    .into_iter()
                    .map(VisibleDirectoryEntryResource::from)
                    .collect(),
            },
        }
    }
}

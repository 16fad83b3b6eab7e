use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ResolveAccessRequestResource {
    #[validate(length(min = 1))]
    pub bucket_name: String,
    #[serde(default)]
    pub object_key: String,
    #[validate(length(min = 1))]
    pub action: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AccessDecisionResource {
    pub allowed: bool,
    pub reason: String,
    pub matched_grant_id: Option<Uuid>,
    pub storage_backend_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ExpandVisiblePrefixesRequestResource {
    #[validate(length(min = 1))]
    pub bucket_name: String,
    #[serde(default)]
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SyntheticDirectoryEntryResource {
    pub key: String,
    pub size: u64,
    pub etag: String,
    pub last_modified: DateTime<Utc>,
}

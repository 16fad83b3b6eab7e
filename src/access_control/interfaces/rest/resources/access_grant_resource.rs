use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::access_control::domain::model::entities::access_grant::AccessGrant;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AccessGrantResource {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bucket_name: String,
    pub prefix: String,
    pub can_read: bool,
    pub can_write: bool,
    pub can_delete: bool,
    pub can_list: bool,
    pub storage_backend_id: Option<Uuid>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&AccessGrant> for AccessGrantResource {
    fn from(grant: &AccessGrant) -> Self {
        let rights = grant.rights();
        Self {
            id: grant.id().value(),
            user_id: grant.owner_user_id().value(),
            bucket_name: grant.bucket_name().value().to_string(),
            prefix: grant.prefix().value().to_string(),
            can_read: rights.can_read,
            can_write: rights.can_write,
            can_delete: rights.can_delete,
            can_list: rights.can_list,
            storage_backend_id: grant.storage_backend_id().map(|id| id.value()),
            description: grant.description().map(str::to_string),
            created_at: grant.created_at(),
            updated_at: grant.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RevokedGrantsResource {
    pub user_id: Uuid,
    pub revoked_grants: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GrantStatisticsResource {
    pub total_grants: u64,
    pub distinct_buckets: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListAccessGrantsQueryResource {
    pub user_id: Option<String>,
}

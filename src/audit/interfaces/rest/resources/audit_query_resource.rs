use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchAuditRecordsQueryResource {
    pub actor_user_id: Option<String>,
    pub bucket_name: Option<String>,
    /// `upload` also matches `upload_initiated`; `download` also matches
    /// `download_initiated`.
    pub action: Option<String>,
    pub outcome: Option<String>,
    pub skip: Option<u64>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuditLimitQueryResource {
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserActivityStatsQueryResource {
    pub days: Option<u32>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::audit::domain::{
    model::entities::audit_record::AuditRecord,
    services::audit_record_query_service::{AuditRecordPage, UserActivityStats},
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AuditRecordResource {
    pub id: Uuid,
    pub actor_user_id: Uuid,
    pub action: String,
    pub bucket_name: String,
    pub object_key: String,
    pub outcome: String,
    pub source_address: String,
    pub user_agent: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub context_metadata: Option<Value>,
    pub error_detail: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl From<&AuditRecord> for AuditRecordResource {
    fn from(record: &AuditRecord) -> Self {
        Self {
            id: record.id().value(),
            actor_user_id: record.actor_user_id(),
            action: record.action().as_str().to_string(),
            bucket_name: record.bucket_name().to_string(),
            object_key: record.object_key().to_string(),
            outcome: record.outcome().as_str().to_string(),
            source_address: record.source_address().to_string(),
            user_agent: record.user_agent().map(str::to_string),
            context_metadata: record.context_metadata().cloned(),
            error_detail: record.error_detail().map(str::to_string),
            recorded_at: record.recorded_at(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AuditRecordPageResource {
    pub records: Vec<AuditRecordResource>,
    pub total_matching: u64,
    pub skip: u64,
    pub limit: u32,
}

impl From<AuditRecordPage> for AuditRecordPageResource {
    fn from(page: AuditRecordPage) -> Self {
        Self {
            records: page.records.iter().map(AuditRecordResource::from).collect(),
            total_matching: page.total_matching,
            skip: page.skip,
            limit: page.limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserActivityStatsResource {
    pub user_id: Uuid,
    pub window_days: u32,
    pub successful_uploads: u64,
    pub successful_downloads: u64,
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl From<UserActivityStats> for UserActivityStatsResource {
    fn from(stats: UserActivityStats) -> Self {
        Self {
            user_id: stats.user_id,
            window_days: stats.window_days,
            successful_uploads: stats.successful_uploads,
            successful_downloads: stats.successful_downloads,
            last_activity_at: stats.last_activity_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AuditHealthResource {
    pub status: String,
    pub failed_appends: u64,
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::audit::domain::model::{
    entities::audit_record::AuditRecord,
    enums::audit_domain_error::AuditDomainError,
    queries::{
        search_audit_records_query::SearchAuditRecordsQuery,
        user_activity_stats_query::UserActivityStatsQuery,
    },
    value_objects::audit_requester::AuditRequester,
};

pub const OWN_ACTIVITY_DEFAULT_LIMIT: u32 = 50;
pub const OWN_ACTIVITY_MAX_LIMIT: u32 = 100;

#[derive(Clone, Debug)]
pub struct AuditRecordPage {
    pub records: Vec<AuditRecord>,
    pub total_matching: u64,
    pub skip: u64,
    pub limit: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserActivityStats {
    pub user_id: Uuid,
    pub window_days: u32,
    pub successful_uploads: u64,
    pub successful_downloads: u64,
    pub last_activity_at: Option<DateTime<Utc>>,
}

/// Read side of the ledger. Every listing is newest first and bounded.
#[async_trait]
pub trait AuditRecordQueryService: Send + Sync {
    async fn handle_search(
        &self,
        query: SearchAuditRecordsQuery,
    ) -> Result<AuditRecordPage, AuditDomainError>;

    async fn handle_own_activity(
        &self,
        requested_by: &AuditRequester,
        limit: Option<u32>,
    ) -> Result<Vec<AuditRecord>, AuditDomainError>;

    async fn handle_recent(
        &self,
        requested_by: &AuditRequester,
        limit: Option<u32>,
    ) -> Result<Vec<AuditRecord>, AuditDomainError>;

    async fn handle_bucket_activity(
        &self,
        requested_by: &AuditRequester,
        bucket_name: String,
        limit: Option<u32>,
    ) -> Result<Vec<AuditRecord>, AuditDomainError>;

    async fn handle_user_activity_stats(
        &self,
        query: UserActivityStatsQuery,
    ) -> Result<UserActivityStats, AuditDomainError>;
}

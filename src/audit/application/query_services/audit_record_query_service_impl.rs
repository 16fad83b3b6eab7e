use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::audit::{
    domain::{
        model::{
            entities::audit_record::AuditRecord,
            enums::{
                audit_action::AuditAction, audit_domain_error::AuditDomainError,
                audit_outcome::AuditOutcome,
            },
            queries::{
                search_audit_records_query::SearchAuditRecordsQuery,
                user_activity_stats_query::UserActivityStatsQuery,
            },
            value_objects::{audit_query_limit::AuditQueryLimits, audit_requester::AuditRequester},
        },
        services::audit_record_query_service::{
            AuditRecordPage, AuditRecordQueryService, OWN_ACTIVITY_DEFAULT_LIMIT,
            OWN_ACTIVITY_MAX_LIMIT, UserActivityStats,
        },
    },
    infrastructure::persistence::repositories::audit_record_repository::{
        AuditRecordCriteria, AuditRecordRepository,
    },
};

pub struct AuditRecordQueryServiceImpl {
    audit_record_repository: Arc<dyn AuditRecordRepository>,
    limits: AuditQueryLimits,
}

impl AuditRecordQueryServiceImpl {
    pub fn new(audit_record_repository: Arc<dyn AuditRecordRepository>) -> Self {
        Self::new_with_limits(audit_record_repository, AuditQueryLimits::default())
    }

    pub fn new_with_limits(
        audit_record_repository: Arc<dyn AuditRecordRepository>,
        limits: AuditQueryLimits,
    ) -> Self {
        Self {
            audit_record_repository,
            limits,
        }
    }

    fn ensure_administrator(requested_by: &AuditRequester) -> Result<(), AuditDomainError> {
        if !requested_by.is_administrator() {
            return Err(AuditDomainError::AdministratorRequired);
        }
        Ok(())
    }

    async fn count_successful(
        &self,
        user_id: Uuid,
        action: AuditAction,
        since: DateTime<Utc>,
    ) -> Result<u64, AuditDomainError> {
        self.audit_record_repository
            .count(&AuditRecordCriteria {
                actor_user_id: Some(user_id),
                actions: action.family(),
                outcome: Some(AuditOutcome::Success),
                recorded_since: Some(since),
                ..AuditRecordCriteria::default()
            })
            .await
    }
}

#[async_trait]
impl AuditRecordQueryService for AuditRecordQueryServiceImpl {
    async fn handle_search(
        &self,
        query: SearchAuditRecordsQuery,
    ) -> Result<AuditRecordPage, AuditDomainError> {
        Self::ensure_administrator(query.requested_by())?;

        let criteria = AuditRecordCriteria {
            actor_user_id: query.actor_user_id(),
            bucket_name: query.bucket_name().map(str::to_string),
            actions: query.action().map(|a| a.family()).unwrap_or_default(),
            outcome: query.outcome(),
            recorded_since: None,
        };
        let limit = self.limits.resolve(query.limit());

        let records = self
            .audit_record_repository
            .find(&criteria, limit.value(), query.skip())
            .await?;
        let total_matching = self.audit_record_repository.count(&criteria).await?;

        Ok(AuditRecordPage {
            records,
            total_matching,
            skip: query.skip(),
            limit: limit.value(),
        })
    }

    async fn handle_own_activity(
        &self,
        requested_by: &AuditRequester,
        limit: Option<u32>,
    ) -> Result<Vec<AuditRecord>, AuditDomainError> {
        let limit = self
            .limits
            .narrowed(OWN_ACTIVITY_DEFAULT_LIMIT, OWN_ACTIVITY_MAX_LIMIT)
            .resolve(limit);

        let criteria = AuditRecordCriteria {
            actor_user_id: Some(requested_by.user_id()),
            ..AuditRecordCriteria::default()
        };

        self.audit_record_repository
            .find(&criteria, limit.value(), 0)
            .await
    }

    async fn handle_recent(
        &self,
        requested_by: &AuditRequester,
        limit: Option<u32>,
    ) -> Result<Vec<AuditRecord>, AuditDomainError> {
        Self::ensure_administrator(requested_by)?;

        let limit = self.limits.resolve(limit);
        self.audit_record_repository
            .find(&AuditRecordCriteria::default(), limit.value(), 0)
            .await
    }

    async fn handle_bucket_activity(
        &self,
        requested_by: &AuditRequester,
        bucket_name: String,
        limit: Option<u32>,
    ) -> Result<Vec<AuditRecord>, AuditDomainError> {
        Self::ensure_administrator(requested_by)?;

        let bucket_name = bucket_name.trim().to_string();
        if bucket_name.is_empty() {
            return Err(AuditDomainError::InvalidBucketName);
        }

        let criteria = AuditRecordCriteria {
            bucket_name: Some(bucket_name),
            ..AuditRecordCriteria::default()
        };
        let limit = self.limits.resolve(limit);

        self.audit_record_repository
            .find(&criteria, limit.value(), 0)
            .await
    }

    async fn handle_user_activity_stats(
        &self,
        query: UserActivityStatsQuery,
    ) -> Result<UserActivityStats, AuditDomainError> {
        Self::ensure_administrator(query.requested_by())?;

        let user_id = query.user_id();
        let since = query.window().starts_at(Utc::now());

        let successful_uploads = self
            .count_successful(user_id, AuditAction::Upload, since)
            .await?;
        let successful_downloads = self
            .count_successful(user_id, AuditAction::Download, since)
            .await?;

        let last_activity_at = self
            .audit_record_repository
            .find(
                &AuditRecordCriteria {
                    actor_user_id: Some(user_id),
                    ..AuditRecordCriteria::default()
                },
                1,
                0,
            )
            .await?
            .first()
            .map(AuditRecord::recorded_at);

        Ok(UserActivityStats {
            user_id,
            window_days: query.window().days(),
            successful_uploads,
            successful_downloads,
            last_activity_at,
        })
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::audit::domain::model::{
    entities::audit_record::AuditRecord,
    enums::{
        audit_action::AuditAction, audit_domain_error::AuditDomainError,
        audit_outcome::AuditOutcome,
    },
};

/// Conjunction of optional filters. An empty `actions` list matches any action.
#[derive(Clone, Debug, Default)]
pub struct AuditRecordCriteria {
    pub actor_user_id: Option<Uuid>,
    pub bucket_name: Option<String>,
    pub actions: Vec<AuditAction>,
    pub outcome: Option<AuditOutcome>,
    pub recorded_since: Option<DateTime<Utc>>,
}

impl AuditRecordCriteria {
    pub fn matches(&self, record: &AuditRecord) -> bool {
        self.actor_user_id
            .is_none_or(|actor| record.actor_user_id() == actor)
            && self
                .bucket_name
                .as_deref()
                .is_none_or(|bucket| record.bucket_name() == bucket)
            && (self.actions.is_empty() || self.actions.contains(&record.action()))
            && self.outcome.is_none_or(|outcome| record.outcome() == outcome)
            && self
                .recorded_since
                .is_none_or(|since| record.recorded_at() >= since)
    }
}

#[async_trait]
pub trait AuditRecordRepository: Send + Sync {
    async fn append(&self, record: &AuditRecord) -> Result<(), AuditDomainError>;

    /// Matching records ordered by `recorded_at` descending.
    async fn find(
        &self,
        criteria: &AuditRecordCriteria,
        limit: u32,
        skip: u64,
    ) -> Result<Vec<AuditRecord>, AuditDomainError>;

    async fn count(&self, criteria: &AuditRecordCriteria) -> Result<u64, AuditDomainError>;
}

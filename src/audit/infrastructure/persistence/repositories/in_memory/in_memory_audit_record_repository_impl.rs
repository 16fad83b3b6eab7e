use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::audit::{
    domain::model::{entities::audit_record::AuditRecord, enums::audit_domain_error::AuditDomainError},
    infrastructure::persistence::repositories::audit_record_repository::{
        AuditRecordCriteria, AuditRecordRepository,
    },
};

/// Append-only process-local ledger.
#[derive(Default)]
pub struct InMemoryAuditRecordRepositoryImpl {
    records: RwLock<Vec<AuditRecord>>,
}

impl InMemoryAuditRecordRepositoryImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditRecordRepository for InMemoryAuditRecordRepositoryImpl {
    async fn append(&self, record: &AuditRecord) -> Result<(), AuditDomainError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn find(
        &self,
        criteria: &AuditRecordCriteria,
        limit: u32,
        skip: u64,
    ) -> Result<Vec<AuditRecord>, AuditDomainError> {
        let records = self.records.read().await;

        // Later appends first on equal timestamps.
        let mut matching = records
            .iter()
            .rev()
            .filter(|record| criteria.matches(record))
            .cloned()
            .collect::<Vec<_>>();
        matching.sort_by(|a, b| b.recorded_at().cmp(&a.recorded_at()));

        Ok(matching
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, criteria: &AuditRecordCriteria) -> Result<u64, AuditDomainError> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|record| criteria.matches(record)).count() as u64)
    }
}

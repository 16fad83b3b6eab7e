use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bucket_warden::{
    access_control::{
        domain::{
            model::{
                entities::access_grant::AccessGrant,
                enums::access_control_domain_error::AccessControlDomainError,
                value_objects::{bucket_name::BucketName, grant_id::GrantId, user_id::UserId},
            },
            services::access_grant_query_service::GrantStatistics,
        },
        infrastructure::persistence::repositories::{
            access_grant_repository::AccessGrantRepository,
            in_memory::in_memory_access_grant_repository_impl::InMemoryAccessGrantRepositoryImpl,
        },
    },
    audit::{
        domain::model::{
            entities::audit_record::AuditRecord, enums::audit_domain_error::AuditDomainError,
        },
        infrastructure::persistence::repositories::{
            audit_record_repository::{AuditRecordCriteria, AuditRecordRepository},
            in_memory::in_memory_audit_record_repository_impl::InMemoryAuditRecordRepositoryImpl,
        },
    },
};

/// In-memory grant store that can be switched offline.
#[derive(Default)]
pub struct SwitchableGrantRepository {
    inner: InMemoryAccessGrantRepositoryImpl,
    offline: AtomicBool,
}

impl SwitchableGrantRepository {
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), AccessControlDomainError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AccessControlDomainError::GrantStoreUnavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl AccessGrantRepository for SwitchableGrantRepository {
    async fn save(&self, grant: &AccessGrant) -> Result<(), AccessControlDomainError> {
        self.check_online()?;
        self.inner.save(grant).await
    }

    async fn update(&self, grant: &AccessGrant) -> Result<bool, AccessControlDomainError> {
        self.check_online()?;
        self.inner.update(grant).await
    }

    async fn find_by_id(
        &self,
        grant_id: &GrantId,
    ) -> Result<Option<AccessGrant>, AccessControlDomainError> {
        self.check_online()?;
        self.inner.find_by_id(grant_id).await
    }

    async fn find_by_user_and_bucket(
        &self,
        user_id: &UserId,
        bucket_name: &BucketName,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        self.check_online()?;
        self.inner.find_by_user_and_bucket(user_id, bucket_name).await
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        self.check_online()?;
        self.inner.find_by_user(user_id).await
    }

    async fn find_all(&self) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        self.check_online()?;
        self.inner.find_all().await
    }

    async fn delete(&self, grant_id: &GrantId) -> Result<bool, AccessControlDomainError> {
        self.check_online()?;
        self.inner.delete(grant_id).await
    }

    async fn delete_by_user(&self, user_id: &UserId) -> Result<u64, AccessControlDomainError> {
        self.check_online()?;
        self.inner.delete_by_user(user_id).await
    }

    async fn statistics(&self) -> Result<GrantStatistics, AccessControlDomainError> {
        self.check_online()?;
        self.inner.statistics().await
    }
}

/// In-memory ledger whose appends can be made to fail. Reads keep working.
#[derive(Default)]
pub struct SwitchableAuditRepository {
    inner: InMemoryAuditRecordRepositoryImpl,
    rejecting_appends: AtomicBool,
}

impl SwitchableAuditRepository {
    pub fn set_rejecting_appends(&self, rejecting: bool) {
        self.rejecting_appends.store(rejecting, Ordering::SeqCst);
    }
}

#[async_trait]
impl AuditRecordRepository for SwitchableAuditRepository {
    async fn append(&self, record: &AuditRecord) -> Result<(), AuditDomainError> {
        if self.rejecting_appends.load(Ordering::SeqCst) {
            return Err(AuditDomainError::LedgerUnavailable("disk full".to_string()));
        }
        self.inner.append(record).await
    }

    async fn find(
        &self,
        criteria: &AuditRecordCriteria,
        limit: u32,
        skip: u64,
    ) -> Result<Vec<AuditRecord>, AuditDomainError> {
        self.inner.find(criteria, limit, skip).await
    }

    async fn count(&self, criteria: &AuditRecordCriteria) -> Result<u64, AuditDomainError> {
        self.inner.count(criteria).await
    }
}

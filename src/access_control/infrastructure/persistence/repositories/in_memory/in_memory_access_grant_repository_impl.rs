use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::access_control::{
    domain::{
        model::{
            entities::access_grant::AccessGrant,
            enums::access_control_domain_error::AccessControlDomainError,
            value_objects::{bucket_name::BucketName, grant_id::GrantId, user_id::UserId},
        },
        services::access_grant_query_service::GrantStatistics,
    },
    infrastructure::persistence::repositories::access_grant_repository::AccessGrantRepository,
};

/// Process-local grant store. Grants keep insertion order so first-match
/// selection is stable.
pub struct InMemoryAccessGrantRepositoryImpl {
    grants: RwLock<Vec<AccessGrant>>,
}

impl InMemoryAccessGrantRepositoryImpl {
    pub fn new() -> Self {
        Self {
            grants: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAccessGrantRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessGrantRepository for InMemoryAccessGrantRepositoryImpl {
    async fn save(&self, grant: &AccessGrant) -> Result<(), AccessControlDomainError> {
        let mut grants = self.grants.write().await;
        match grants.iter_mut().find(|stored| stored.id() == grant.id()) {
            Some(stored) => *stored = grant.clone(),
            None => grants.push(grant.clone()),
        }
        Ok(())
    }

    async fn update(&self, grant: &AccessGrant) -> Result<bool, AccessControlDomainError> {
        let mut grants = self.grants.write().await;
        match grants.iter_mut().find(|stored| stored.id() == grant.id()) {
            Some(stored) => {
                *stored = grant.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_id(
        &self,
        grant_id: &GrantId,
    ) -> Result<Option<AccessGrant>, AccessControlDomainError> {
        let grants = self.grants.read().await;
        Ok(grants.iter().find(|grant| grant.id() == grant_id).cloned())
    }

    async fn find_by_user_and_bucket(
        &self,
        user_id: &UserId,
        bucket_name: &BucketName,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        let grants = self.grants.read().await;
        Ok(grants
            .iter()
            .filter(|grant| grant.owner_user_id() == user_id && grant.bucket_name() == bucket_name)
            .cloned()
            .collect())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        let grants = self.grants.read().await;
        Ok(grants
            .iter()
            .filter(|grant| grant.owner_user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        Ok(self.grants.read().await.clone())
    }

    async fn delete(&self, grant_id: &GrantId) -> Result<bool, AccessControlDomainError> {
        let mut grants = self.grants.write().await;
        let before = grants.len();
        grants.retain(|grant| grant.id() != grant_id);
        Ok(grants.len() < before)
    }

    async fn delete_by_user(&self, user_id: &UserId) -> Result<u64, AccessControlDomainError> {
        let mut grants = self.grants.write().await;
        let before = grants.len();
        grants.retain(|grant| grant.owner_user_id() != user_id);
        Ok((before - grants.len()) as u64)
    }

    async fn statistics(&self) -> Result<GrantStatistics, AccessControlDomainError> {
        let grants = self.grants.read().await;
        let buckets = grants
            .iter()
            .map(|grant| grant.bucket_name().value())
            .collect::<HashSet<_>>();

        Ok(GrantStatistics {
            total_grants: grants.len() as u64,
            distinct_buckets: buckets.len() as u64,
        })
    }
}

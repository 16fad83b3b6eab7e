use async_trait::async_trait;

use crate::access_control::domain::{
    model::{
        entities::access_grant::AccessGrant,
        enums::access_control_domain_error::AccessControlDomainError,
        value_objects::{bucket_name::BucketName, grant_id::GrantId, user_id::UserId},
    },
    services::access_grant_query_service::GrantStatistics,
};

#[async_trait]
pub trait AccessGrantRepository: Send + Sync {
    /// Inserts the grant or replaces the stored grant with the same id.
    async fn save(&self, grant: &AccessGrant) -> Result<(), AccessControlDomainError>;

    /// Replaces an existing grant only. Returns false when no grant has that
    /// id any more, so a concurrent delete is never undone.
    async fn update(&self, grant: &AccessGrant) -> Result<bool, AccessControlDomainError>;

    async fn find_by_id(
        &self,
        grant_id: &GrantId,
    ) -> Result<Option<AccessGrant>, AccessControlDomainError>;

    async fn find_by_user_and_bucket(
        &self,
        user_id: &UserId,
        bucket_name: &BucketName,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError>;

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError>;

    async fn find_all(&self) -> Result<Vec<AccessGrant>, AccessControlDomainError>;

    /// Returns false when no grant had that id.
    async fn delete(&self, grant_id: &GrantId) -> Result<bool, AccessControlDomainError>;

    async fn delete_by_user(&self, user_id: &UserId) -> Result<u64, AccessControlDomainError>;

    async fn statistics(&self) -> Result<GrantStatistics, AccessControlDomainError>;
}

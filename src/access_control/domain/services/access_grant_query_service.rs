use async_trait::async_trait;

use crate::access_control::domain::model::{
    entities::access_grant::AccessGrant,
    enums::access_control_domain_error::AccessControlDomainError,
    queries::list_access_grants_query::ListAccessGrantsQuery,
    value_objects::access_subject::AccessSubject,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GrantStatistics {
    pub total_grants: u64,
    pub distinct_buckets: u64,
}

#[async_trait]
pub trait AccessGrantQueryService: Send + Sync {
    async fn handle_list_grants(
        &self,
        query: ListAccessGrantsQuery,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError>;

    /// Grants that give `subject` access. Administrators get an empty list
    /// since they are not scoped by grants.
    async fn handle_list_accessible(
        &self,
        subject: &AccessSubject,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError>;

    async fn handle_grant_statistics(
        &self,
        requested_by: &AccessSubject,
    ) -> Result<GrantStatistics, AccessControlDomainError>;
}

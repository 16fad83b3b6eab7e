use std::sync::Arc;

use async_trait::async_trait;

use crate::access_control::{
    domain::{
        model::{
            entities::access_grant::AccessGrant,
            enums::access_control_domain_error::AccessControlDomainError,
            queries::list_access_grants_query::ListAccessGrantsQuery,
            value_objects::access_subject::AccessSubject,
        },
        services::access_grant_query_service::{AccessGrantQueryService, GrantStatistics},
    },
    infrastructure::persistence::repositories::access_grant_repository::AccessGrantRepository,
};

pub struct AccessGrantQueryServiceImpl {
    access_grant_repository: Arc<dyn AccessGrantRepository>,
}

impl AccessGrantQueryServiceImpl {
    pub fn new(access_grant_repository: Arc<dyn AccessGrantRepository>) -> Self {
        Self {
            access_grant_repository,
        }
    }
}

#[async_trait]
impl AccessGrantQueryService for AccessGrantQueryServiceImpl {
    async fn handle_list_grants(
        &self,
        query: ListAccessGrantsQuery,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        if !query.requested_by().is_administrator() {
            return Err(AccessControlDomainError::AdministratorRequired);
        }

        match query.owner_user_id() {
            Some(owner_user_id) => {
                self.access_grant_repository
                    .find_by_user(owner_user_id)
                    .await
            }
            None => self.access_grant_repository.find_all().await,
        }
    }

    async fn handle_list_accessible(
        &self,
        subject: &AccessSubject,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        if subject.is_administrator() {
            return Ok(Vec::new());
        }

        self.access_grant_repository
            .find_by_user(subject.user_id())
            .await
    }

    async fn handle_grant_statistics(
        &self,
        requested_by: &AccessSubject,
    ) -> Result<GrantStatistics, AccessControlDomainError> {
        if !requested_by.is_administrator() {
            return Err(AccessControlDomainError::AdministratorRequired);
        }

        self.access_grant_repository.statistics().await
    }
}

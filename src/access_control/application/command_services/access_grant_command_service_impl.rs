use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::access_control::{
    domain::{
        model::{
            commands::{
                create_access_grant_command::CreateAccessGrantCommand,
                delete_access_grant_command::DeleteAccessGrantCommand,
                revoke_user_grants_command::RevokeUserGrantsCommand,
                update_access_grant_command::UpdateAccessGrantCommand,
            },
            entities::access_grant::AccessGrant,
            enums::access_control_domain_error::AccessControlDomainError,
            value_objects::access_subject::AccessSubject,
        },
        services::access_grant_command_service::AccessGrantCommandService,
    },
    infrastructure::persistence::repositories::access_grant_repository::AccessGrantRepository,
};

pub struct AccessGrantCommandServiceImpl {
    access_grant_repository: Arc<dyn AccessGrantRepository>,
}

impl AccessGrantCommandServiceImpl {
    pub fn new(access_grant_repository: Arc<dyn AccessGrantRepository>) -> Self {
        Self {
            access_grant_repository,
        }
    }

    fn ensure_administrator(subject: &AccessSubject) -> Result<(), AccessControlDomainError> {
        if !subject.is_administrator() {
            return Err(AccessControlDomainError::AdministratorRequired);
        }
        Ok(())
    }
}

#[async_trait]
impl AccessGrantCommandService for AccessGrantCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateAccessGrantCommand,
    ) -> Result<AccessGrant, AccessControlDomainError> {
        Self::ensure_administrator(command.issued_by())?;

        let grant = AccessGrant::issue(
            *command.owner_user_id(),
            command.bucket_name().clone(),
            command.prefix().clone(),
            command.rights(),
            command.storage_backend_id(),
            command.description().map(str::to_string),
            Utc::now(),
        );

        self.access_grant_repository.save(&grant).await?;

        tracing::info!(
            grant_id = %grant.id(),
            owner_user_id = %grant.owner_user_id(),
            bucket = %grant.bucket_name(),
            prefix = grant.prefix().value(),
            issued_by = %command.issued_by().user_id(),
            "grant created"
        );

        Ok(grant)
    }

    async fn handle_update(
        &self,
        command: UpdateAccessGrantCommand,
    ) -> Result<AccessGrant, AccessControlDomainError> {
        Self::ensure_administrator(command.issued_by())?;

        let mut grant = self
            .access_grant_repository
            .find_by_id(command.grant_id())
            .await?
            .ok_or(AccessControlDomainError::GrantNotFound)?;

        let issued_by = *command.issued_by().user_id();
        grant.apply_patch(command.into_patch(), Utc::now());
        if !self.access_grant_repository.update(&grant).await? {
            return Err(AccessControlDomainError::GrantNotFound);
        }

        tracing::info!(grant_id = %grant.id(), issued_by = %issued_by, "grant updated");

        Ok(grant)
    }

    async fn handle_delete(
        &self,
        command: DeleteAccessGrantCommand,
    ) -> Result<(), AccessControlDomainError> {
        Self::ensure_administrator(command.issued_by())?;

        let deleted = self
            .access_grant_repository
            .delete(command.grant_id())
            .await?;

        if !deleted {
            return Err(AccessControlDomainError::GrantNotFound);
        }

        tracing::info!(
            grant_id = %command.grant_id(),
            issued_by = %command.issued_by().user_id(),
            "grant deleted"
        );

        Ok(())
    }

    async fn handle_revoke_user_grants(
        &self,
        command: RevokeUserGrantsCommand,
    ) -> Result<u64, AccessControlDomainError> {
        Self::ensure_administrator(command.issued_by())?;

        let removed = self
            .access_grant_repository
            .delete_by_user(command.user_id())
            .await?;

        tracing::info!(
            user_id = %command.user_id(),
            removed,
            issued_by = %command.issued_by().user_id(),
            "user grants revoked"
        );

        Ok(removed)
    }
}

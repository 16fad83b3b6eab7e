use async_trait::async_trait;

use crate::access_control::domain::model::{
    commands::{
        create_access_grant_command::CreateAccessGrantCommand,
        delete_access_grant_command::DeleteAccessGrantCommand,
        revoke_user_grants_command::RevokeUserGrantsCommand,
        update_access_grant_command::UpdateAccessGrantCommand,
    },
    entities::access_grant::AccessGrant,
    enums::access_control_domain_error::AccessControlDomainError,
};

#[async_trait]
pub trait AccessGrantCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateAccessGrantCommand,
    ) -> Result<AccessGrant, AccessControlDomainError>;

    async fn handle_update(
        &self,
        command: UpdateAccessGrantCommand,
    ) -> Result<AccessGrant, AccessControlDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteAccessGrantCommand,
    ) -> Result<(), AccessControlDomainError>;

    /// Returns how many grants were removed.
    async fn handle_revoke_user_grants(
        &self,
        command: RevokeUserGrantsCommand,
    ) -> Result<u64, AccessControlDomainError>;
}

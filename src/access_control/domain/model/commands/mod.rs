pub mod create_access_grant_command;
pub mod delete_access_grant_command;
pub mod revoke_user_grants_command;
pub mod update_access_grant_command;

use bucket_warden::{
    access_control::domain::model::{
        commands::create_access_grant_command::{
            CreateAccessGrantCommand, CreateAccessGrantCommandParts,
        },
        entities::access_grant::AccessGrantRights,
        value_objects::{access_subject::AccessSubject, user_id::UserId},
    },
    storage_gateway::domain::model::{
        commands::{
            authorize_storage_operation_command::AuthorizeStorageOperationCommand,
            report_operation_outcome_command::{
                ReportOperationOutcomeCommand, ReportOperationOutcomeCommandParts,
            },
        },
        value_objects::storage_actor::StorageActor,
    },
};
use uuid::Uuid;

pub const ADMIN_ID: &str = "0190a6b2-0000-7000-8000-00000000ad01";
pub const USER_A_ID: &str = "0190a6b2-0000-7000-8000-00000000000a";
pub const BUCKET: &str = "team-docs";

pub fn actor(raw: &str, is_administrator: bool) -> StorageActor {
    StorageActor {
        user_id: Uuid::parse_str(raw).expect("valid uuid"),
        is_administrator,
        source_address: Some("10.0.0.7".to_string()),
        user_agent: Some("warden-tests".to_string()),
    }
}

pub fn rights(can_read: bool, can_write: bool, can_delete: bool, can_list: bool) -> AccessGrantRights {
    AccessGrantRights {
        can_read,
        can_write,
        can_delete,
        can_list,
    }
}

pub fn grant_for(owner: &str, prefix: &str, rights: AccessGrantRights) -> CreateAccessGrantCommand {
    let issued_by = AccessSubject::administrator(
        UserId::new(ADMIN_ID.to_string()).expect("valid user id"),
    );

    CreateAccessGrantCommand::new(CreateAccessGrantCommandParts {
        issued_by,
        owner_user_id: owner.to_string(),
        bucket_name: BUCKET.to_string(),
        prefix: Some(prefix.to_string()),
        can_read: Some(rights.can_read),
        can_write: Some(rights.can_write),
        can_delete: Some(rights.can_delete),
        can_list: Some(rights.can_list),
        storage_backend_id: None,
        description: None,
    })
    .expect("valid grant command")
}

pub fn authorize(raw_actor: &str, operation: &str, key: &str) -> AuthorizeStorageOperationCommand {
    AuthorizeStorageOperationCommand::new(
        actor(raw_actor, false),
        operation,
        BUCKET.to_string(),
        key.to_string(),
    )
    .expect("valid authorize command")
}

pub fn outcome(
    raw_actor: &str,
    operation: &str,
    key: &str,
    error_detail: Option<&str>,
) -> ReportOperationOutcomeCommand {
    ReportOperationOutcomeCommand::new(ReportOperationOutcomeCommandParts {
        actor: actor(raw_actor, false),
        operation_name: operation.to_string(),
        bucket_name: BUCKET.to_string(),
        object_key: key.to_string(),
        succeeded: error_detail.is_none(),
        error_detail: error_detail.map(str::to_string),
        context_metadata: None,
    })
    .expect("valid outcome command")
}

use bucket_warden::access_control::domain::model::{
    commands::create_access_grant_command::{
        CreateAccessGrantCommand, CreateAccessGrantCommandParts,
    },
    entities::access_grant::{AccessGrant, AccessGrantRights},
    queries::resolve_access_query::{ResolveAccessQuery, ResolveAccessQueryParts},
    value_objects::{
        access_subject::AccessSubject, bucket_name::BucketName, object_prefix::ObjectPrefix,
        user_id::UserId,
    },
};
use chrono::Utc;

pub const ADMIN_ID: &str = "0190a6b2-0000-7000-8000-00000000ad01";
pub const USER_A_ID: &str = "0190a6b2-0000-7000-8000-00000000000a";
pub const USER_B_ID: &str = "0190a6b2-0000-7000-8000-00000000000b";
pub const BUCKET: &str = "team-docs";
pub const OTHER_BUCKET: &str = "team-media";

pub fn user_id(raw: &str) -> UserId {
    UserId::new(raw.to_string()).expect("valid user id")
}

pub fn member(raw: &str) -> AccessSubject {
    AccessSubject::member(user_id(raw))
}

pub fn administrator() -> AccessSubject {
    AccessSubject::administrator(user_id(ADMIN_ID))
}

pub fn rights(can_read: bool, can_write: bool, can_delete: bool, can_list: bool) -> AccessGrantRights {
    AccessGrantRights {
        can_read,
        can_write,
        can_delete,
        can_list,
    }
}

pub fn grant(owner: &str, bucket: &str, prefix: &str, rights: AccessGrantRights) -> AccessGrant {
    AccessGrant::issue(
        user_id(owner),
        BucketName::new(bucket.to_string()).expect("valid bucket name"),
        ObjectPrefix::new(prefix.to_string()),
        rights,
        None,
        None,
        Utc::now(),
    )
}

pub fn create_command(issued_by: AccessSubject, owner: &str, prefix: Option<&str>) -> CreateAccessGrantCommand {
    CreateAccessGrantCommand::new(CreateAccessGrantCommandParts {
        issued_by,
        owner_user_id: owner.to_string(),
        bucket_name: BUCKET.to_string(),
        prefix: prefix.map(str::to_string),
        can_read: None,
        can_write: None,
        can_delete: None,
        can_list: None,
        storage_backend_id: None,
        description: Some("project documents".to_string()),
    })
    .expect("valid create grant command")
}

pub fn resolve_query(subject: AccessSubject, key: &str, action: &str) -> ResolveAccessQuery {
    ResolveAccessQuery::new(ResolveAccessQueryParts {
        subject,
        bucket_name: BUCKET.to_string(),
        object_key: key.to_string(),
        action_name: action.to_string(),
    })
    .expect("valid resolve query")
}

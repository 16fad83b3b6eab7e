use crate::access_control::domain::model::{
    entities::access_grant::AccessGrantRights,
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{
        access_subject::AccessSubject, bucket_name::BucketName, object_prefix::ObjectPrefix,
        storage_backend_id::StorageBackendId, user_id::UserId,
    },
};

#[derive(Clone, Debug)]
pub struct CreateAccessGrantCommand {
    issued_by: AccessSubject,
    owner_user_id: UserId,
    bucket_name: BucketName,
    prefix: ObjectPrefix,
    rights: AccessGrantRights,
    storage_backend_id: Option<StorageBackendId>,
    description: Option<String>,
}

pub struct CreateAccessGrantCommandParts {
    pub issued_by: AccessSubject,
    pub owner_user_id: String,
    pub bucket_name: String,
    pub prefix: Option<String>,
    pub can_read: Option<bool>,
    pub can_write: Option<bool>,
    pub can_delete: Option<bool>,
    pub can_list: Option<bool>,
    pub storage_backend_id: Option<String>,
    pub description: Option<String>,
}

impl CreateAccessGrantCommand {
    pub fn new(parts: CreateAccessGrantCommandParts) -> Result<Self, AccessControlDomainError> {
        let defaults = AccessGrantRights::default();

        Ok(Self {
            issued_by: parts.issued_by,
            owner_user_id: UserId::new(parts.owner_user_id)?,
            bucket_name: BucketName::new(parts.bucket_name)?,
            prefix: parts.prefix.map(ObjectPrefix::new).unwrap_or_default(),
            rights: AccessGrantRights {
                can_read: parts.can_read.unwrap_or(defaults.can_read),
                can_write: parts.can_write.unwrap_or(defaults.can_write),
                can_delete: parts.can_delete.unwrap_or(defaults.can_delete),
                can_list: parts.can_list.unwrap_or(defaults.can_list),
            },
            storage_backend_id: parts
                .storage_backend_id
                .map(StorageBackendId::new)
                .transpose()?,
            description: parts
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        })
    }

    pub fn issued_by(&self) -> &AccessSubject {
        &self.issued_by
    }
    pub fn owner_user_id(&self) -> &UserId {
        &self.owner_user_id
    }
    pub fn bucket_name(&self) -> &BucketName {
        &self.bucket_name
    }
    pub fn prefix(&self) -> &ObjectPrefix {
        &self.prefix
    }
    pub fn rights(&self) -> AccessGrantRights {
        self.rights
    }
    pub fn storage_backend_id(&self) -> Option<StorageBackendId> {
        self.storage_backend_id
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

use crate::access_control::domain::model::{
    entities::access_grant::AccessGrantPatch,
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{
        access_subject::AccessSubject, bucket_name::BucketName, grant_id::GrantId,
        object_prefix::ObjectPrefix, storage_backend_id::StorageBackendId,
    },
};

#[derive(Clone, Debug)]
pub struct UpdateAccessGrantCommand {
    issued_by: AccessSubject,
    grant_id: GrantId,
    patch: AccessGrantPatch,
}

pub struct UpdateAccessGrantCommandParts {
    pub issued_by: AccessSubject,
    pub grant_id: String,
    pub bucket_name: Option<String>,
    pub prefix: Option<String>,
    pub can_read: Option<bool>,
    pub can_write: Option<bool>,
    pub can_delete: Option<bool>,
    pub can_list: Option<bool>,
    /// `None`: keep. `Some(None)`: clear.
    pub description: Option<Option<String>>,
    /// `None`: keep. `Some(None)`: reset to the platform default backend.
    pub storage_backend_id: Option<Option<String>>,
}

impl UpdateAccessGrantCommand {
    pub fn new(parts: UpdateAccessGrantCommandParts) -> Result<Self, AccessControlDomainError> {
        let storage_backend_id = match parts.storage_backend_id {
            None => None,
            Some(None) => Some(None),
            Some(Some(raw)) => Some(Some(StorageBackendId::new(raw)?)),
        };

        Ok(Self {
            issued_by: parts.issued_by,
            grant_id: GrantId::new(parts.grant_id)?,
            patch: AccessGrantPatch {
                bucket_name: parts.bucket_name.map(BucketName::new).transpose()?,
                prefix: parts.prefix.map(ObjectPrefix::new),
                can_read: parts.can_read,
                can_write: parts.can_write,
                can_delete: parts.can_delete,
                can_list: parts.can_list,
                description: parts.description.map(|description| {
                    description
                        .map(|d| d.trim().to_string())
                        .filter(|d| !d.is_empty())
                }),
                storage_backend_id,
            },
        })
    }

    pub fn issued_by(&self) -> &AccessSubject {
        &self.issued_by
    }
    pub fn grant_id(&self) -> &GrantId {
        &self.grant_id
    }
    pub fn patch(&self) -> &AccessGrantPatch {
        &self.patch
    }
    pub fn into_patch(self) -> AccessGrantPatch {
        self.patch
    }
}

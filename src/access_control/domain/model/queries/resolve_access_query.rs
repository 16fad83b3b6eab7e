use crate::access_control::domain::model::{
    enums::{access_control_domain_error::AccessControlDomainError, storage_action::StorageAction},
    value_objects::{access_subject::AccessSubject, bucket_name::BucketName},
};

#[derive(Clone, Debug)]
pub struct ResolveAccessQuery {
    subject: AccessSubject,
    bucket_name: BucketName,
    object_key: String,
    action: StorageAction,
}

pub struct ResolveAccessQueryParts {
    pub subject: AccessSubject,
    pub bucket_name: String,
    pub object_key: String,
    pub action_name: String,
}

impl ResolveAccessQuery {
    pub fn new(parts: ResolveAccessQueryParts) -> Result<Self, AccessControlDomainError> {
        let action = parts.action_name.parse::<StorageAction>()?;

        Ok(Self {
            subject: parts.subject,
            bucket_name: BucketName::for_lookup(parts.bucket_name)?,
            object_key: parts.object_key,
            action,
        })
    }

    pub fn subject(&self) -> &AccessSubject {
        &self.subject
    }
    pub fn bucket_name(&self) -> &BucketName {
        &self.bucket_name
    }
    pub fn object_key(&self) -> &str {
        &self.object_key
    }
    pub fn action(&self) -> StorageAction {
        self.action
    }
}

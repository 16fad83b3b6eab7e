use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{
        access_subject::AccessSubject, bucket_name::BucketName, object_prefix::ObjectPrefix,
    },
};

#[derive(Clone, Debug)]
pub struct ExpandVisiblePrefixesQuery {
    subject: AccessSubject,
    bucket_name: BucketName,
    requested_prefix: ObjectPrefix,
}

impl ExpandVisiblePrefixesQuery {
    pub fn new(
        subject: AccessSubject,
        bucket_name: String,
        requested_prefix: String,
    ) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            subject,
            bucket_name: BucketName::for_lookup(bucket_name)?,
            requested_prefix: ObjectPrefix::new(requested_prefix),
        })
    }

    pub fn subject(&self) -> &AccessSubject {
        &self.subject
    }
    pub fn bucket_name(&self) -> &BucketName {
        &self.bucket_name
    }
    pub fn requested_prefix(&self) -> &ObjectPrefix {
        &self.requested_prefix
    }
}

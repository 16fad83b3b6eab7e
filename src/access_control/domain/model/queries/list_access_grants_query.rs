use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{access_subject::AccessSubject, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct ListAccessGrantsQuery {
    requested_by: AccessSubject,
    owner_user_id: Option<UserId>,
}

impl ListAccessGrantsQuery {
    pub fn new(
        requested_by: AccessSubject,
        owner_user_id: Option<String>,
    ) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            requested_by,
            owner_user_id: owner_user_id.map(UserId::new).transpose()?,
        })
    }

    pub fn requested_by(&self) -> &AccessSubject {
        &self.requested_by
    }
    pub fn owner_user_id(&self) -> Option<&UserId> {
        self.owner_user_id.as_ref()
    }
}

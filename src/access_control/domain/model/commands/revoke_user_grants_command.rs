use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{access_subject::AccessSubject, user_id::UserId},
};

/// Removes every grant owned by a user, as done when the user is deleted.
/// Audit history is not touched.
#[derive(Clone, Debug)]
pub struct RevokeUserGrantsCommand {
    issued_by: AccessSubject,
    user_id: UserId,
}

impl RevokeUserGrantsCommand {
    pub fn new(issued_by: AccessSubject, user_id: String) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            issued_by,
            user_id: UserId::new(user_id)?,
        })
    }

    pub fn issued_by(&self) -> &AccessSubject {
        &self.issued_by
    }
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::{access_subject::AccessSubject, grant_id::GrantId},
};

#[derive(Clone, Debug)]
pub struct DeleteAccessGrantCommand {
    issued_by: AccessSubject,
    grant_id: GrantId,
}

impl DeleteAccessGrantCommand {
    pub fn new(
        issued_by: AccessSubject,
        grant_id: String,
    ) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            issued_by,
            grant_id: GrantId::new(grant_id)?,
        })
    }

    pub fn issued_by(&self) -> &AccessSubject {
        &self.issued_by
    }
    pub fn grant_id(&self) -> &GrantId {
        &self.grant_id
    }
}

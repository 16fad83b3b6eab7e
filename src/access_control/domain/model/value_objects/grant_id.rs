use std::fmt;

use uuid::Uuid;

use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct GrantId(Uuid);

impl GrantId {
    pub fn new(value: String) -> Result<Self, AccessControlDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| AccessControlDomainError::InvalidGrantId)?;
        Ok(Self(parsed))
    }

    pub fn new_random() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for GrantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

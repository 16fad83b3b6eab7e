use std::fmt;

use uuid::Uuid;

use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(value: String) -> Result<Self, AccessControlDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| AccessControlDomainError::InvalidUserId)?;
        Ok(Self(parsed))
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

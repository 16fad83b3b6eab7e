use uuid::Uuid;

use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

/// Identifier of the physical storage endpoint a grant is bound to. Resolution
/// of the endpoint itself happens outside this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct StorageBackendId(Uuid);

impl StorageBackendId {
    pub fn new(value: String) -> Result<Self, AccessControlDomainError> {
        let parsed = Uuid::parse_str(value.trim())
            .map_err(|_| AccessControlDomainError::InvalidStorageBackendId)?;
        Ok(Self(parsed))
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

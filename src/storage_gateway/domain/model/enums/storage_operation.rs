use std::{fmt, str::FromStr};

use super::storage_gateway_domain_error::StorageGatewayDomainError;

/// Object-storage operation a caller wants to perform.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StorageOperation {
    Upload,
    Download,
    Delete,
    List,
}

impl StorageOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Download => "download",
            Self::Delete => "delete",
            Self::List => "list",
        }
    }

    /// Grant flag the operation needs.
    pub fn required_action(&self) -> &'static str {
        match self {
            Self::Upload => "write",
            Self::Download => "read",
            Self::Delete => "delete",
            Self::List => "list",
        }
    }

    /// Ledger action for a denial or a terminal outcome.
    pub fn audit_action(&self) -> &'static str {
        self.as_str()
    }

    /// Ledger action recorded when the operation is authorized. Transfers
    /// get an initiation record; delete and list are recorded under their
    /// own action.
    pub fn authorized_audit_action(&self) -> &'static str {
        match self {
            Self::Upload => "upload_initiated",
            Self::Download => "download_initiated",
            Self::Delete | Self::List => self.as_str(),
        }
    }
}

impl fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageOperation {
    type Err = StorageGatewayDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "upload" => Ok(Self::Upload),
            "download" => Ok(Self::Download),
            "delete" => Ok(Self::Delete),
            "list" => Ok(Self::List),
            other => Err(StorageGatewayDomainError::UnknownAction(other.to_string())),
        }
    }
}

use std::{fmt, str::FromStr};

use super::audit_domain_error::AuditDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AuditAction {
    Upload,
    UploadInitiated,
    Download,
    DownloadInitiated,
    Delete,
    List,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::UploadInitiated => "upload_initiated",
            Self::Download => "download",
            Self::DownloadInitiated => "download_initiated",
            Self::Delete => "delete",
            Self::List => "list",
        }
    }

    /// Actions a filter on `self` matches. Filtering by a terminal upload or
    /// download also matches its `*_initiated` counterpart.
    pub fn family(&self) -> Vec<AuditAction> {
        match self {
            Self::Upload => vec![Self::Upload, Self::UploadInitiated],
            Self::Download => vec![Self::Download, Self::DownloadInitiated],
            other => vec![*other],
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = AuditDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "upload" => Ok(Self::Upload),
            "upload_initiated" => Ok(Self::UploadInitiated),
            "download" => Ok(Self::Download),
            "download_initiated" => Ok(Self::DownloadInitiated),
            "delete" => Ok(Self::Delete),
            "list" => Ok(Self::List),
            other => Err(AuditDomainError::UnknownAuditAction(other.to_string())),
        }
    }
}

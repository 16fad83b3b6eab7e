use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::access_control::domain::model::{
    entities::access_grant::AccessGrant,
    enums::access_control_domain_error::AccessControlDomainError,
    queries::{
        expand_visible_prefixes_query::ExpandVisiblePrefixesQuery,
        resolve_access_query::ResolveAccessQuery,
    },
};

pub const DIRECTORY_ETAG: &str = "directory";

/// Outcome of a single resolution. `matched_grant` is `None` both for denials
/// and for administrators, who act with platform-default access.
#[derive(Clone, Debug)]
pub struct AccessDecision {
    pub allowed: bool,
    pub matched_grant: Option<AccessGrant>,
    pub reason: String,
}

impl AccessDecision {
    pub fn allow(matched_grant: Option<AccessGrant>, reason: String) -> Self {
        Self {
            allowed: true,
            matched_grant,
            reason,
        }
    }

    pub fn deny(reason: String) -> Self {
        Self {
            allowed: false,
            matched_grant: None,
            reason,
        }
    }
}

/// Zero-size directory-like listing entry for a sub-prefix the subject may
/// list even though the requested prefix itself is not listable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntheticDirectoryEntry {
    pub key: String,
    pub size: u64,
    pub etag: String,
    pub last_modified: DateTime<Utc>,
}

#[async_trait]
pub trait PermissionResolutionService: Send + Sync {
    async fn handle_resolve(
        &self,
        query: ResolveAccessQuery,
    ) -> Result<AccessDecision, AccessControlDomainError>;

    async fn handle_expand(
        &self,
        query: ExpandVisiblePrefixesQuery,
    ) -> Result<Vec<SyntheticDirectoryEntry>, AccessControlDomainError>;
}

use std::fmt;

use regex::Regex;

use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

lazy_static::lazy_static! {
    static ref BUCKET_NAME_REGEX: Regex =
        Regex::new(r"^[a-z0-9][a-z0-9.-]{1,61}[a-z0-9]$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BucketName(String);

impl BucketName {
    pub fn new(value: String) -> Result<Self, AccessControlDomainError> {
        let trimmed = value.trim();
        if !BUCKET_NAME_REGEX.is_match(trimmed) || trimmed.contains("..") {
            return Err(AccessControlDomainError::InvalidBucketName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Names a bucket that is only looked up, never stored. Legacy and
    /// non-AWS names are accepted here; grants still require `new`.
    pub fn for_lookup(value: String) -> Result<Self, AccessControlDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AccessControlDomainError::InvalidBucketName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

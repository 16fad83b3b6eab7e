use std::{fmt, str::FromStr};

use super::audit_domain_error::AuditDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AuditOutcome {
    Success,
    Failure,
}

impl AuditOutcome {
    pub fn from_success(succeeded: bool) -> Self {
        if succeeded { Self::Success } else { Self::Failure }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditOutcome {
    type Err = AuditDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            other => Err(AuditDomainError::UnknownAuditOutcome(other.to_string())),
        }
    }
}

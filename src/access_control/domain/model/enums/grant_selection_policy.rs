use std::str::FromStr;

use super::access_control_domain_error::AccessControlDomainError;

/// How the resolver picks among several grants that all cover a key and
/// permit the action.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GrantSelectionPolicy {
    /// First matching grant in repository order.
    #[default]
    FirstMatch,
    /// Matching grant with the longest prefix; ties keep repository order.
    LongestPrefix,
}

impl GrantSelectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstMatch => "first_match",
            Self::LongestPrefix => "longest_prefix",
        }
    }
}

impl FromStr for GrantSelectionPolicy {
    type Err = AccessControlDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "first_match" => Ok(Self::FirstMatch),
            "longest_prefix" => Ok(Self::LongestPrefix),
            other => Err(AccessControlDomainError::UnknownGrantSelectionPolicy(
                other.to_string(),
            )),
        }
    }
}

use chrono::{DateTime, Duration, Utc};

use crate::audit::domain::model::enums::audit_domain_error::AuditDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ActivityWindow(u32);

impl ActivityWindow {
    pub const DEFAULT_DAYS: u32 = 30;
    pub const MAX_DAYS: u32 = 365;

    pub fn new(days: Option<u32>) -> Result<Self, AuditDomainError> {
        let days = days.unwrap_or(Self::DEFAULT_DAYS);
        if !(1..=Self::MAX_DAYS).contains(&days) {
            return Err(AuditDomainError::InvalidActivityWindow {
                requested: days,
                max: Self::MAX_DAYS,
            });
        }
        Ok(Self(days))
    }

    pub fn days(&self) -> u32 {
        self.0
    }

    pub fn starts_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(i64::from(self.0))
    }
}

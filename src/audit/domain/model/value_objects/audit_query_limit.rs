/// Limits applied to every ledger read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AuditQueryLimits {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl AuditQueryLimits {
    pub const DEFAULT_LIMIT: u32 = 100;
    pub const MAX_LIMIT: u32 = 500;

    pub fn new(default_limit: u32, max_limit: u32) -> Self {
        let max_limit = max_limit.max(1);
        Self {
            default_limit: default_limit.clamp(1, max_limit),
            max_limit,
        }
    }

    /// Narrows these limits, never widening the hard maximum.
    pub fn narrowed(&self, default_limit: u32, max_limit: u32) -> Self {
        Self::new(default_limit, max_limit.min(self.max_limit))
    }

    pub fn resolve(&self, requested: Option<u32>) -> AuditQueryLimit {
        let limit = requested
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit);
        AuditQueryLimit(limit)
    }
}

impl Default for AuditQueryLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, Self::MAX_LIMIT)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AuditQueryLimit(u32);

impl AuditQueryLimit {
    pub fn value(&self) -> u32 {
        self.0
    }
}

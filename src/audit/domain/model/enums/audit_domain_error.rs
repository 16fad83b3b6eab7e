use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditDomainError {
    #[error("actor id is invalid")]
    InvalidActorId,

    #[error("bucket name must not be empty")]
    InvalidBucketName,

    #[error("unknown audit action: {0}")]
    UnknownAuditAction(String),

    #[error("unknown audit outcome: {0}")]
    UnknownAuditOutcome(String),

    #[error("activity window must be between 1 and {max} days, got {requested}")]
    InvalidActivityWindow { requested: u32, max: u32 },

    #[error("administrator privileges required")]
    AdministratorRequired,

    #[error("audit ledger unavailable: {0}")]
    LedgerUnavailable(String),
}

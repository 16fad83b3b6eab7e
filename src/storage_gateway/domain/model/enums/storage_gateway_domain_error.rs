use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageGatewayDomainError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("grant store unavailable: {0}")]
    GrantStoreUnavailable(String),

    #[error("audit write failed: {0}")]
    AuditWriteFailure(String),
}

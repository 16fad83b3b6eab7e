use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessControlDomainError {
    #[error("user id is invalid")]
    InvalidUserId,

    #[error("grant id is invalid")]
    InvalidGrantId,

    #[error("bucket name is invalid")]
    InvalidBucketName,

    #[error("storage backend id is invalid")]
    InvalidStorageBackendId,

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("unknown grant selection policy: {0}")]
    UnknownGrantSelectionPolicy(String),

    #[error("administrator privileges required")]
    AdministratorRequired,

    #[error("grant not found")]
    GrantNotFound,

    #[error("grant store unavailable: {0}")]
    GrantStoreUnavailable(String),
}

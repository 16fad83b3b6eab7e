pub mod storage_access_facade;
pub mod storage_audit_facade;

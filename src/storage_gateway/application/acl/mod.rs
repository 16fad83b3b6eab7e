pub mod storage_access_facade_real_impl;
pub mod storage_audit_facade_real_impl;

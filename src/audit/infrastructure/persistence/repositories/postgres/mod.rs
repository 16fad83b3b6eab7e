pub mod sqlx_audit_record_repository_impl;

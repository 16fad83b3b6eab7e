pub mod in_memory_audit_record_repository_impl;

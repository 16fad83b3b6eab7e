pub mod audit_record_repository;
pub mod in_memory;
pub mod postgres;

pub mod audit_record_command_service;
pub mod audit_record_query_service;

pub mod audit_record_command_service_impl;

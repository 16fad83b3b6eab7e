pub mod audit_record;

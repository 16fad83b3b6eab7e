pub mod audit_error_response_resource;
pub mod audit_query_resource;
pub mod audit_record_resource;

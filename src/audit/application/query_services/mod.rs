pub mod audit_record_query_service_impl;

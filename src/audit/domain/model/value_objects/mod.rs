pub mod activity_window;
pub mod audit_query_limit;
pub mod audit_record_id;
pub mod audit_requester;

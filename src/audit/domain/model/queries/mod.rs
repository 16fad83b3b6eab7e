pub mod search_audit_records_query;
pub mod user_activity_stats_query;

pub mod access_grant_query_service_impl;
pub mod permission_resolution_service_impl;

pub mod access_grant_command_service;
pub mod access_grant_query_service;
pub mod permission_resolution_service;
